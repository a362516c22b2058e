//! SVG preview of an arranged scene.
//!
//! Visible elements become outlined rectangles with their label centered
//! inside. Phantom cell frames are skipped unless
//! [`StyleConfig::show_phantoms`] is set, in which case they are drawn as
//! dashed outlines beneath the content.

use std::io;

use log::{debug, info};
use svg::{
    Document,
    node::element::{Group, Rectangle, Text},
};

use tessella_core::{
    color::Color,
    diagram::Measurable,
    geometry::{Bounds, Insets},
    scene::{Element, Scene},
};

use crate::{config::StyleConfig, export};

const FONT_SIZE: f32 = 12.0;
const STROKE_WIDTH: f32 = 1.0;
const PHANTOM_STROKE: &str = "#9e9e9e";
const PHANTOM_DASHARRAY: &str = "4 3";

/// SVG exporter configured from a [`StyleConfig`].
#[derive(Debug, Clone)]
pub struct Svg {
    background: Option<Color>,
    margin: Insets,
    show_phantoms: bool,
}

impl Svg {
    /// Creates an exporter from style settings.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the configured background color
    /// cannot be parsed.
    pub fn from_style(style: &StyleConfig) -> Result<Self, export::Error> {
        let background = style.background_color().map_err(export::Error::Render)?;
        Ok(Self {
            background,
            margin: Insets::uniform(style.margin().max(0.0)),
            show_phantoms: style.show_phantoms(),
        })
    }

    /// Renders `scene` into an SVG document whose view box covers the scene
    /// bounds plus the configured margin.
    pub fn render_document(&self, scene: &Scene) -> Document {
        let view = scene.bounds().add_padding(self.margin);
        debug!(
            width = view.width(),
            height = view.height(),
            elements = scene.elements().len();
            "Rendering SVG document"
        );

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", view.width())
            .set("height", view.height());

        if let Some(background) = &self.background {
            doc = doc.add(rectangle(view).set("fill", background));
        }

        if self.show_phantoms {
            let phantoms = scene
                .phantom_elements()
                .fold(Group::new().set("data-layer", "cells"), |group, element| {
                    group.add(render_phantom(element))
                });
            doc = doc.add(phantoms);
        }

        let content = scene
            .visible_elements()
            .fold(Group::new().set("data-layer", "items"), |group, element| {
                group.add(render_element(element))
            });

        doc.add(content)
    }
}

impl export::Exporter for Svg {
    fn export_scene(&self, scene: &Scene, writer: &mut dyn io::Write) -> Result<(), export::Error> {
        let doc = self.render_document(scene);
        write!(writer, "{doc}")?;

        info!("SVG document written");
        Ok(())
    }
}

fn rectangle(bounds: Bounds) -> Rectangle {
    Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
}

fn render_phantom(element: &Element) -> Rectangle {
    rectangle(element.bounds())
        .set("fill", "none")
        .set("stroke", PHANTOM_STROKE)
        .set("stroke-width", STROKE_WIDTH)
        .set("stroke-dasharray", PHANTOM_DASHARRAY)
}

fn render_element(element: &Element) -> Group {
    let fill = element.fill().unwrap_or_default();
    let bounds = element.bounds();
    let group = Group::new().add(
        rectangle(bounds)
            .set("fill", &fill)
            .set("stroke", "black")
            .set("stroke-width", STROKE_WIDTH),
    );

    match element.label() {
        Some(label) => {
            let center = bounds.center();
            group.add(
                Text::new(label)
                    .set("x", center.x())
                    .set("y", center.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-family", "sans-serif")
                    .set("font-size", FONT_SIZE),
            )
        }
        None => group,
    }
}
