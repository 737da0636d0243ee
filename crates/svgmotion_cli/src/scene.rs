//! Builds the in-memory SVG scene from a scene file

use anyhow::Result;
use svgmotion_animation::Easing;
use svgmotion_core::SvgElement;

use crate::config::SceneConfig;

/// A rect and the curve its width follows
pub struct SceneRect {
    pub element: SvgElement,
    pub easing: Easing,
}

/// Handles to every animated element in the scene
pub struct Scene {
    pub root: SvgElement,
    pub texts: Vec<SvgElement>,
    pub rects: Vec<SceneRect>,
}

impl Scene {
    pub fn build(config: &SceneConfig) -> Result<Self> {
        let root = SvgElement::new("svg")
            .with_attr("xmlns", "http://www.w3.org/2000/svg")
            .with_attr("width", config.scene.width)
            .with_attr("height", config.scene.height);

        let mut texts = Vec::with_capacity(config.texts.len());
        for text_config in &config.texts {
            let text = SvgElement::new("text")
                .with_attr("x", text_config.x)
                .with_attr("font-size", text_config.font_size);
            for line in &text_config.lines {
                text.append_child(
                    SvgElement::new("tspan")
                        .with_attr("y", line.y)
                        .with_text(line.text.as_str()),
                );
            }
            root.append_child(text.clone());
            texts.push(text);
        }

        let mut rects = Vec::with_capacity(config.rects.len());
        for rect_config in &config.rects {
            let element = SvgElement::new("rect")
                .with_attr("x", 0)
                .with_attr("y", rect_config.y)
                .with_attr("width", config.timing.rect_width.from)
                .with_attr("height", rect_config.height);
            root.append_child(element.clone());
            rects.push(SceneRect {
                element,
                easing: rect_config.easing(&config.timing.rect_width)?,
            });
        }

        Ok(Self { root, texts, rects })
    }

    pub fn to_markup(&self) -> String {
        self.root.to_markup()
    }
}
