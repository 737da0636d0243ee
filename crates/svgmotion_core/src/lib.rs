//! svgmotion Core
//!
//! Shared building blocks for the svgmotion animation engine:
//!
//! - **Target Handles**: traits for nodes whose attributes get animated
//! - **SVG Elements**: a headless, shared element tree implementing those traits
//! - **Errors**: the error type returned by the animation entry points
//!
//! # Example
//!
//! ```rust
//! use svgmotion_core::{AttributeTarget, SvgElement, TextBlock};
//!
//! let text = SvgElement::new("text")
//!     .with_attr("x", 20)
//!     .with_child(SvgElement::new("tspan").with_text("Hello"));
//!
//! text.lines()[0].set_number("dx", 1000.0);
//! assert_eq!(text.lines()[0].attribute("dx").as_deref(), Some("1000"));
//! ```

pub mod element;
pub mod error;
pub mod target;

pub use element::{AttributeWrite, SvgElement};
pub use error::{MotionError, Result};
pub use target::{format_number, AttributeTarget, TextBlock, TextLine};
