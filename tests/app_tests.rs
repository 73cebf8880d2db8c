mod support;

use support::{block_typeface, block_typeface_path};
use trophyrs::app::{App, Command, Outcome};
use trophyrs::font::FontHandle;
use trophyrs::text::Typeface;
use trophyrs::text_mesh::TransformAxis;
use trophyrs::{FontError, TextError};

fn export_groups(app: &mut App) -> usize {
    match app.dispatch(Command::Export) {
        Ok(Outcome::Exported(payload)) => payload.groups.len(),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn font_file_resolves_in_the_background() {
    let mut font = FontHandle::load_file(block_typeface_path());
    let face = font.wait().expect("fixture loads");
    assert_eq!(face.family(), Some("Block Test"));
    assert!(!font.is_pending());
}

#[test]
fn malformed_font_stays_unresolved() {
    let (font, resolver) = FontHandle::pending();
    let mut app = App::new(font);
    resolver.resolve(Typeface::from_json("{ \"glyphs\": 3 }"));
    assert_eq!(app.frame().len(), 5);
    assert!(app.font().failure().is_some());
    assert_eq!(
        app.dispatch(Command::SetTextContent("DOC".into())),
        Err(TextError::FontNotReady)
    );
}

#[test]
fn bytes_are_sniffed_as_json() {
    let face = Typeface::from_bytes(support::BLOCK_TYPEFACE.as_bytes().to_vec()).unwrap();
    assert_eq!(face.units_per_em(), 1000.0);
    assert!(face.glyph('D').is_some());
}

#[cfg(feature = "truetype-text")]
#[test]
fn garbage_bytes_are_not_a_font() {
    let err = Typeface::from_bytes(vec![0, 1, 2, 3, 4, 5, 6, 7]).unwrap_err();
    assert!(matches!(err, FontError::TrueType(_)));
}

#[test]
fn full_session() {
    let (font, resolver) = FontHandle::pending();
    let mut app = App::new(font);

    // slider before any text: remembered only
    assert_eq!(
        app.dispatch(Command::SetTransform { axis: TransformAxis::PositionY, value: 2.7 }),
        Ok(Outcome::TransformChanged { applied: false })
    );
    assert_eq!(
        app.dispatch(Command::SetTextContent("Winner".into())),
        Err(TextError::FontNotReady)
    );
    assert_eq!(export_groups(&mut app), 5);

    resolver.resolve(Ok(block_typeface()));
    assert_eq!(app.frame().len(), 5);

    assert_eq!(
        app.dispatch(Command::SetTextContent("  ".into())),
        Err(TextError::EmptyInput)
    );
    assert_eq!(app.dispatch(Command::SetTextContent(" DOC ".into())), Ok(Outcome::TextPlaced));
    assert_eq!(app.scene.text.content(), "DOC");
    assert_eq!(app.scene.text.current().unwrap().transform.position.y, 2.7);

    assert_eq!(
        app.dispatch(Command::SetTransform { axis: TransformAxis::Scale, value: 1.5 }),
        Ok(Outcome::TransformChanged { applied: true })
    );
    let draw_list = app.frame();
    assert_eq!(draw_list.len(), 6);
    let text = draw_list.last().unwrap();
    assert_eq!(text.name, "text");
    assert_eq!(text.world[(0, 0)], 1.5);
    assert_eq!(text.world[(1, 3)], 2.7);

    assert_eq!(export_groups(&mut app), 6);

    // replacing the text keeps the remembered sliders
    app.dispatch(Command::SetTextContent("OD".into())).unwrap();
    let node = app.scene.text.current().unwrap();
    assert_eq!(node.transform.scale.y, 1.5);
    assert_eq!(app.frame().len(), 6);
}
