// main.rs
//
// Command-line trophy builder: loads a font, engraves TEXT on the trophy and writes
// trophy.stl to OUT_DIR.
//
//     trophyrs [TEXT] [FONT_PATH] [OUT_DIR]

use std::process::ExitCode;
use std::time::Duration;
use trophyrs::app::{App, Command, Outcome};
use trophyrs::font::FontHandle;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let text = args.next().unwrap_or_else(|| "Champion".to_string());
    let font_path = args.next();
    let out_dir = args.next().unwrap_or_else(|| ".".to_string());

    let mut app = match &font_path {
        Some(path) => App::new(FontHandle::load_file(path)),
        None => {
            log::warn!("no FONT_PATH given; exporting the bare trophy");
            let (font, _resolver) = FontHandle::pending();
            App::new(font)
        },
    };

    if font_path.is_some() {
        // Frame loop until the font settles
        while app.font().is_pending() {
            app.frame();
            std::thread::sleep(FRAME);
        }
        match app.dispatch(Command::SetTextContent(text)) {
            Ok(_) => log::info!("engraved {:?}", app.scene.text.content()),
            Err(notice) => log::warn!("{notice}"),
        }
    }

    let payload = match app.dispatch(Command::Export) {
        Ok(Outcome::Exported(payload)) => payload,
        Ok(other) => {
            log::error!("unexpected outcome {other:?}");
            return ExitCode::FAILURE;
        },
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        },
    };

    match payload.save(&out_dir) {
        Ok(path) => {
            println!("wrote {} ({} meshes)", path.display(), payload.groups.len());
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("could not write {}: {e}", payload.file_name);
            ExitCode::FAILURE
        },
    }
}
