//! The demo sequence
//!
//! Two passes run side by side on one runtime:
//!
//! - **Lettering**: reveal the first text fast, shrink its font while pulling
//!   the second line up, then hide everything and reveal it again slowly.
//! - **Rects**: tween every rect's width with its own curve, and restart once
//!   all of them land, for a fixed number of cycles.

use anyhow::Result;
use futures::future::try_join_all;
use svgmotion_animation::{prepare_lines, reveal_text, tween, Tween};
use svgmotion_core::{SvgElement, TextBlock};

use crate::config::{TimingConfig, TweenConfig};
use crate::scene::Scene;

/// What the demo did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoReport {
    /// Full reveals of the first text
    pub reveals: u32,
    /// Completed rect passes
    pub rect_cycles: u32,
    /// Characters hidden by the last reset
    pub hidden_chars: usize,
}

/// Hide every character of every text
pub fn reset(scene: &Scene, far_offset: f64) -> usize {
    scene
        .texts
        .iter()
        .map(|text| prepare_lines(text, far_offset))
        .sum()
}

/// Run both passes to completion
pub async fn run(scene: &Scene, timing: &TimingConfig) -> Result<DemoReport> {
    let hidden_chars = reset(scene, timing.far_offset);
    tracing::info!(
        texts = scene.texts.len(),
        rects = scene.rects.len(),
        hidden_chars,
        "demo started"
    );

    let (reveals, rect_cycles) =
        tokio::join!(lettering_pass(scene, timing), rect_pass(scene, timing));

    let report = DemoReport {
        reveals: reveals?,
        rect_cycles: rect_cycles?,
        hidden_chars,
    };
    tracing::info!(?report, "demo finished");
    Ok(report)
}

async fn tween_from_config(
    attribute: &str,
    target: &SvgElement,
    config: &TweenConfig,
) -> Result<bool> {
    Ok(Tween::new(config.spec(attribute)?)?.run(target).await)
}

async fn lettering_pass(scene: &Scene, timing: &TimingConfig) -> Result<u32> {
    let Some(text) = scene.texts.first() else {
        tracing::debug!("no text to letter");
        return Ok(0);
    };

    reveal_text(text, timing.lettering_tick_ms).await;
    tracing::info!("first reveal done");

    let shrink = tween_from_config("font-size", text, &timing.font_size);
    let restart = async {
        if let Some(line) = text.lines().get(1) {
            tween_from_config("y", line, &timing.line_spacing).await?;
        }
        reset(scene, timing.far_offset);
        reveal_text(text, timing.restart_tick_ms).await;
        tracing::info!("second reveal done");
        Ok::<_, anyhow::Error>(())
    };

    let (shrink, restart) = tokio::join!(shrink, restart);
    shrink?;
    restart?;
    Ok(2)
}

async fn rect_pass(scene: &Scene, timing: &TimingConfig) -> Result<u32> {
    if scene.rects.is_empty() {
        return Ok(0);
    }

    let width = &timing.rect_width;
    for cycle in 0..timing.rect_cycles {
        try_join_all(scene.rects.iter().map(|rect| {
            tween(
                "width",
                width.from,
                width.to,
                &rect.element,
                width.step,
                width.tick_ms,
                rect.easing,
            )
        }))
        .await?;
        tracing::debug!(cycle, "rect pass done");
    }

    Ok(timing.rect_cycles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SceneConfig;
    use std::time::Duration;
    use svgmotion_core::AttributeTarget;
    use tokio::time::Instant;

    #[test]
    fn test_reset_hides_every_line() {
        let scene = Scene::build(&SceneConfig::default()).unwrap();
        // "Letter by letter," (17) and "line by line." (13)
        assert_eq!(reset(&scene, 1000.0), 16 + 12);

        let lines = scene.texts[0].lines();
        assert!(lines[1]
            .attribute("dx")
            .unwrap()
            .split(' ')
            .all(|dx| dx == "1000"));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_demo_runs_to_completion() {
        let config = SceneConfig::default();
        let scene = Scene::build(&config).unwrap();

        let report = run(&scene, &config.timing).await.unwrap();

        assert_eq!(report.reveals, 2);
        assert_eq!(report.rect_cycles, 2);
        assert_eq!(report.hidden_chars, 28);

        let text = &scene.texts[0];
        assert_eq!(text.attribute("font-size").as_deref(), Some("10"));
        let lines = text.lines();
        assert_eq!(lines[1].attribute("y").as_deref(), Some("20"));
        assert!(lines
            .iter()
            .all(|line| line.attribute("dx").unwrap().split(' ').all(|dx| dx == "0")));
        for rect in &scene.rects {
            assert_eq!(rect.element.attribute("width").as_deref(), Some("200"));
        }
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_restart_waits_for_line_spacing() {
        let mut config = SceneConfig::default();
        config.rects.clear();
        let scene = Scene::build(&config).unwrap();
        let started = Instant::now();

        run(&scene, &config.timing).await.unwrap();

        // fast reveal (17 + 13 ticks at 10ms), y tween (65 ticks at 25ms),
        // slow reveal (30 ticks at 50ms); the font tween ends inside the last one
        let expected = 30 * 10 + 65 * 25 + 30 * 50;
        assert_eq!(started.elapsed(), Duration::from_millis(expected));
    }

    #[tokio::test(flavor = "current_thread", start_paused = true)]
    async fn test_empty_scene() {
        let mut config = SceneConfig::default();
        config.texts.clear();
        config.rects.clear();
        let scene = Scene::build(&config).unwrap();

        let report = run(&scene, &config.timing).await.unwrap();
        assert_eq!(report, DemoReport::default());
    }
}
