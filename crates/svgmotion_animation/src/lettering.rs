//! Letter-by-letter, line-by-line text reveal
//!
//! Each line carries a `dx` offset list with one entry per character. A far
//! offset keeps a character pushed out of view; a `0` puts it in place.
//! Every tick shifts a `0` in from the left and drops the last entry, so one
//! more character comes into view while the list keeps its length.

use std::time::Duration;

use svgmotion_core::{format_number, AttributeTarget, TextBlock, TextLine};
use tokio::time::{self, Instant, MissedTickBehavior};

/// Per-character horizontal offset attribute
pub const OFFSET_ATTRIBUTE: &str = "dx";

/// Tick used when a caller passes 0
pub const DEFAULT_TICK_MS: u64 = 100;

/// Push every character of every line out to `far_offset`
///
/// Returns the sum of `char_count - 1` over all lines. The count comes
/// straight from the raw text content, so whitespace inside the line markup
/// counts too.
pub fn prepare_lines<B: TextBlock + ?Sized>(block: &B, far_offset: f64) -> usize {
    let far = format_number(far_offset);
    let mut total = 0;

    for line in block.lines() {
        let len = line.char_count();
        total += len.saturating_sub(1);
        line.set_attribute(OFFSET_ATTRIBUTE, &vec![far.as_str(); len].join(" "));
    }

    tracing::debug!(total, far_offset, "prepared lines");
    total
}

/// Shift a `0` into an offset list, dropping the last entry
///
/// `"0 13 13 12"` becomes `"0 0 13 13"`.
pub fn shift_offsets(offsets: &str) -> String {
    let mut entries: Vec<&str> = offsets.split_whitespace().collect();
    entries.insert(0, "0");
    entries.pop();
    entries.join(" ")
}

/// Reveal one line, one character per tick
///
/// Ticks exactly `char_count` times. A line without characters completes
/// immediately.
pub async fn reveal_line<L: TextLine + ?Sized>(line: &L, tick_ms: u64, parent_x: &str) {
    let len = line.char_count();
    if len == 0 {
        return;
    }

    let tick_ms = if tick_ms == 0 { DEFAULT_TICK_MS } else { tick_ms };
    let period = Duration::from_millis(tick_ms);
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for _ in 0..len {
        interval.tick().await;
        let offsets = line.attribute(OFFSET_ATTRIBUTE).unwrap_or_default();
        line.set_attribute(OFFSET_ATTRIBUTE, &shift_offsets(&offsets));
        line.set_attribute("x", parent_x);
    }
}

/// Reveal every line of `block`, strictly one line after another
pub async fn reveal_text<B: TextBlock + ?Sized>(block: &B, tick_ms: u64) {
    let parent_x = block
        .attribute("x")
        .filter(|x| !x.is_empty())
        .unwrap_or_else(|| "0".to_string());

    let lines = block.lines();
    tracing::debug!(lines = lines.len(), tick_ms, "reveal started");

    for (index, line) in lines.iter().enumerate() {
        reveal_line(line, tick_ms, &parent_x).await;
        tracing::trace!(index, "line revealed");
    }

    tracing::debug!("reveal completed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgmotion_core::SvgElement;

    fn text_with_lines(lines: &[&str]) -> SvgElement {
        lines.iter().fold(SvgElement::new("text"), |text, line| {
            text.with_child(SvgElement::new("tspan").with_text(*line))
        })
    }

    #[test]
    fn test_prepare_single_line() {
        let text = text_with_lines(&["Hello"]);
        assert_eq!(prepare_lines(&text, 1000.0), 4);
        assert_eq!(
            text.lines()[0].attribute("dx").as_deref(),
            Some("1000 1000 1000 1000 1000")
        );
    }

    #[test]
    fn test_prepare_counts_whitespace() {
        let text = text_with_lines(&["ab", " cd\n", ""]);
        // (2 - 1) + (4 - 1) + 0
        assert_eq!(prepare_lines(&text, 50.0), 4);
        assert_eq!(text.lines()[1].attribute("dx").as_deref(), Some("50 50 50 50"));
        assert_eq!(text.lines()[2].attribute("dx").as_deref(), Some(""));
    }

    #[test]
    fn test_prepare_without_lines() {
        let text = SvgElement::new("text").with_text("no tspans");
        assert_eq!(prepare_lines(&text, 1000.0), 0);
    }

    #[test]
    fn test_shift_law() {
        assert_eq!(shift_offsets("0 13 13 12"), "0 0 13 13");
        assert_eq!(shift_offsets("7"), "0");
        assert_eq!(shift_offsets(""), "");
    }

    #[test]
    fn test_shift_converges_to_zeros() {
        let mut offsets = "1000 1000 1000 1000".to_string();
        for _ in 0..4 {
            offsets = shift_offsets(&offsets);
            assert_eq!(offsets.split(' ').count(), 4);
        }
        assert_eq!(offsets, "0 0 0 0");
        assert_eq!(shift_offsets(&offsets), offsets);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_reveal_line_ticks_per_character() {
        let text = text_with_lines(&["abc"]).with_attr("x", 20);
        prepare_lines(&text, 1000.0);
        let line = text.lines()[0].clone();
        line.record_writes();
        let started = Instant::now();

        reveal_line(&line, 10, "20").await;

        assert_eq!(started.elapsed(), Duration::from_millis(30));
        assert_eq!(
            line.writes_to("dx"),
            vec!["0 1000 1000", "0 0 1000", "0 0 0"]
        );
        assert_eq!(line.writes_to("x"), vec!["20", "20", "20"]);
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_reveal_is_sequential() {
        let text = text_with_lines(&["abc", "de"]);
        prepare_lines(&text, 1000.0);
        let lines = text.lines();
        let started = Instant::now();

        let probe = async {
            // First line finishes at 30ms, second line ticks at 40ms and 50ms
            time::sleep(Duration::from_millis(35)).await;
            (
                lines[0].attribute("dx").unwrap(),
                lines[1].attribute("dx").unwrap(),
            )
        };
        let ((), (first, second)) = tokio::join!(reveal_text(&text, 10), probe);

        assert_eq!(first, "0 0 0");
        assert_eq!(second, "1000 1000");
        assert_eq!(lines[1].attribute("dx").as_deref(), Some("0 0"));
        assert_eq!(started.elapsed(), Duration::from_millis(50));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_reveal_parent_x_defaults_to_zero() {
        let text = text_with_lines(&["a"]).with_attr("x", "");
        prepare_lines(&text, 1000.0);

        reveal_text(&text, 10).await;

        assert_eq!(text.lines()[0].attribute("x").as_deref(), Some("0"));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_reveal_default_tick() {
        let text = text_with_lines(&["ab"]);
        prepare_lines(&text, 1000.0);
        let started = Instant::now();

        reveal_text(&text, 0).await;

        assert_eq!(started.elapsed(), Duration::from_millis(2 * DEFAULT_TICK_MS));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_reveal_empty_block_resolves_immediately() {
        let started = Instant::now();
        reveal_text(&SvgElement::new("text"), 10).await;
        reveal_text(&text_with_lines(&[""]), 10).await;
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
