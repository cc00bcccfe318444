use std::collections::VecDeque;
use std::io;

use cluesheet::prelude::*;

const PLAIN: RenderOptions = RenderOptions { color: false };

fn session(edition: Edition, script: &[&str]) -> Session<Vec<u8>> {
    Session::with_output(
        Sheet::new(edition),
        Box::new(ScriptedInput::new(script.iter().copied())),
        PLAIN,
        Vec::new(),
    )
}

fn output(session: &Session<Vec<u8>>) -> String {
    String::from_utf8(session.output().clone()).expect("utf8 output")
}

#[tokio::test]
async fn mark_green_through_full_cycle() -> anyhow::Result<()> {
    let mut s = session(
        Edition::Extended,
        &["mansion", "mark who green", "1", "m 1"],
    );
    let state = s.run().await?;
    assert_eq!(state.variant, BoardVariant::Mansion);
    assert_eq!(
        s.sheet().mark(CategoryItem::new("Green", Category::Who)),
        MarkValue::Confirmed
    );
    let text = output(&s);
    assert!(text.contains("Location: Mansion"));
    assert!(text.contains("[ ? ]"));
    Ok(())
}

#[tokio::test]
async fn switching_board_clears_marks() -> anyhow::Result<()> {
    let mut s = session(
        Edition::Extended,
        &[
            "mansion",
            "mark who plum",
            "mark what rope",
            "mark where kitchen",
            "name who white",
            "boardwalk",
        ],
    );
    let state = s.run().await?;
    assert_eq!(state.variant, BoardVariant::Boardwalk);
    assert!(state.marks.is_empty());
    assert!(state.highlights.is_empty());
    Ok(())
}

#[tokio::test]
async fn name_toggle_on_and_off() -> anyhow::Result<()> {
    let scarlet = CategoryItem::new("Scarlet", Category::Who);
    let mut s = session(Edition::Extended, &["boardwalk", "name who scarlet"]);
    s.run().await?;
    assert!(s.sheet().is_highlighted(scarlet));
    assert!(output(&s).contains("Scarlet*"));

    let mut s = session(Edition::Extended, &["boardwalk", "n 5", "n 5", "5"]);
    s.run().await?;
    assert!(!s.sheet().is_highlighted(scarlet));
    assert_eq!(s.sheet().mark(scarlet), MarkValue::Cross);
    Ok(())
}

#[tokio::test]
async fn errors_are_reported_and_ignored() -> anyhow::Result<()> {
    let mut s = session(
        Edition::Classic,
        &["1", "mansion", "mark where beach", "99", "name who green", "dance"],
    );
    let state = s.run().await?;
    assert!(state.marks.is_empty());
    let text = output(&s);
    assert!(text.contains("Error: Choose 'mansion' or 'boardwalk' first"));
    assert!(text.contains("Error: 'beach' is not on the where list"));
    assert!(text.contains("Error: Row 99 is out of range (1-21)"));
    assert!(text.contains("Error: Name highlighting is not available"));
    assert!(text.contains("Error: Unknown command 'dance'"));
    Ok(())
}

#[tokio::test]
async fn quit_stops_before_remaining_lines() -> anyhow::Result<()> {
    let mut s = session(Edition::Extended, &["mansion", "quit", "boardwalk"]);
    let state = s.run().await?;
    assert_eq!(state.variant, BoardVariant::Mansion);
    Ok(())
}

#[tokio::test]
async fn json_dump_describes_board() -> anyhow::Result<()> {
    let mut s = session(Edition::Extended, &["boardwalk", "3", "json"]);
    s.run().await?;
    let text = output(&s);
    let start = text.find('{').expect("json in output");
    let end = text.rfind('}').expect("json in output");
    let v: serde_json::Value = serde_json::from_str(&text[start..=end])?;
    assert_eq!(v["screen"], "board");
    assert_eq!(v["variant"], "Boardwalk");
    assert_eq!(v["sections"][2]["title"], "Where (Boardwalk)");
    assert_eq!(v["sections"][0]["rows"][2]["glyph"], "X");
    Ok(())
}

#[test]
fn apply_change_returns_to_picker() {
    let mut s = session(Edition::Extended, &[]);
    s.apply(Command::Select(BoardVariant::Mansion)).unwrap();
    s.apply("m who mustard".parse().unwrap()).unwrap();
    s.apply(Command::Change).unwrap();
    assert_eq!(s.sheet().variant(), BoardVariant::Unselected);
    assert_eq!(
        s.apply("1".parse().unwrap()),
        Err(CommandError::NoBoard)
    );
    assert_eq!(s.sheet().marked_count(), 1);
}

#[test]
fn classic_highlight_rejected_through_apply() {
    let mut s = session(Edition::Classic, &[]);
    s.apply(Command::Select(BoardVariant::Boardwalk)).unwrap();
    assert_eq!(
        s.apply("name 1".parse().unwrap()),
        Err(CommandError::Sheet(SheetError::HighlightUnavailable))
    );
}

#[tokio::test]
async fn script_file_skips_comments() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("cluesheet-{}.txt", std::process::id()));
    std::fs::write(&path, "# setup\nmansion\n\n  mark what dagger  \n")?;
    let input = ScriptedInput::from_file(&path).await?;
    std::fs::remove_file(&path)?;
    assert_eq!(input.remaining(), 2);
    Ok(())
}

/// Input that yields one line which is not valid UTF-8 between good lines.
struct GarbledInput {
    lines: VecDeque<Option<&'static str>>,
}

#[async_trait::async_trait]
impl InputSource for GarbledInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        match self.lines.pop_front() {
            Some(Some(line)) => Ok(Some(line.to_string())),
            Some(None) => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "stream did not contain valid UTF-8",
            )
            .into()),
            None => Ok(None),
        }
    }
}

#[tokio::test]
async fn invalid_utf8_line_is_reported_and_skipped() -> anyhow::Result<()> {
    let input = GarbledInput {
        lines: VecDeque::from([Some("mansion"), None, Some("mark who plum")]),
    };
    let mut s = Session::with_output(
        Sheet::new(Edition::Extended),
        Box::new(input),
        PLAIN,
        Vec::new(),
    );
    let state = s.run().await?;
    assert_eq!(state.variant, BoardVariant::Mansion);
    assert_eq!(
        s.sheet().mark(CategoryItem::new("Plum", Category::Who)),
        MarkValue::Cross
    );
    assert!(output(&s).contains("Error: stream did not contain valid UTF-8"));
    Ok(())
}

struct BrokenInput;

#[async_trait::async_trait]
impl InputSource for BrokenInput {
    async fn next_line(&mut self) -> anyhow::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal went away").into())
    }
}

#[tokio::test]
async fn other_read_errors_end_the_session() {
    let mut s = Session::with_output(
        Sheet::new(Edition::Extended),
        Box::new(BrokenInput),
        PLAIN,
        Vec::new(),
    );
    let err = s.run().await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<io::Error>().map(io::Error::kind),
        Some(io::ErrorKind::BrokenPipe)
    );
}
