//! Host-document glue for the web and desktop renderers.

use dioxus::prelude::document;

use super::controller::DocumentHost;
use super::language::TextDirection;

/// Writes `dir`/`lang` on `<html>` through the renderer's script bridge.
/// Works the same in the browser and in the desktop webview.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvalDocument;

impl DocumentHost for EvalDocument {
    fn set_direction(&mut self, direction: TextDirection) {
        run(&format!(
            "document.documentElement.dir = '{}';",
            direction.as_attr()
        ));
    }

    fn set_lang(&mut self, code: &str) {
        run(&format!("document.documentElement.lang = '{code}';"));
    }
}

fn run(script: &str) {
    // Fire and forget: nothing is read back.
    let _ = document::eval(script);
}
