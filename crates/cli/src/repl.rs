//! Command loop driving the demo scene.
//!
//! Responsibilities:
//! - Parse one command per line and apply it to the controller.
//! - Re-measure and re-position the popover after a click, standing in for
//!   the layout pass a real host performs.
//! - Render the document tree and widget state on demand.

use std::io::{BufRead, Write};

use anyhow::Result;
use popover_dom::{Document, Key, NodeId, PointerEvent};
use popover_widget::PopoverController;
use tracing::info;

use crate::scene;

const HELP: &str = "\
Commands:
  click <n>      activate trigger button n (1-based)
  click <x> <y>  pointer activation at viewport coordinates
  esc            press Escape
  advance <ms>   advance the virtual clock
  dump           print the document tree
  state          print widget state
  help           show this help
  quit           exit";

pub fn run(
    doc: &mut Document,
    controller: &mut PopoverController,
    triggers: &[NodeId],
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "popover demo — type 'help' for commands")?;
    for line in input.lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => writeln!(out, "{HELP}")?,
            ["esc"] => {
                let dismissed = controller.handle_key(doc, Key::Escape);
                writeln!(out, "escape: dismissed={dismissed}")?;
            }
            ["advance", ms] => match ms.parse::<u64>() {
                Ok(ms) => {
                    controller.advance(doc, ms);
                    writeln!(out, "advanced {ms}ms")?;
                }
                Err(_) => writeln!(out, "advance wants a millisecond count")?,
            },
            ["click", n] => match n.parse::<usize>() {
                Ok(index) => match index.checked_sub(1).and_then(|i| triggers.get(i)) {
                    Some(&trigger) => click(doc, controller, Some(trigger), &mut out)?,
                    None => writeln!(out, "no trigger #{index}")?,
                },
                Err(_) => writeln!(out, "click wants coordinates or a trigger number")?,
            },
            ["click", x, y] => match (x.parse::<f64>(), y.parse::<f64>()) {
                (Ok(x), Ok(y)) => {
                    let target = doc.hit_test(x, y);
                    click(doc, controller, target, &mut out)?;
                }
                _ => writeln!(out, "click wants coordinates or a trigger number")?,
            },
            ["dump"] => dump(doc, &mut out)?,
            ["state"] => {
                let widget = controller.widget();
                writeln!(
                    out,
                    "visible={} popover={} deferred={}",
                    widget.is_visible(),
                    widget.popover().is_some(),
                    widget.pending_deferred()
                )?;
            }
            _ => writeln!(out, "unknown command, try 'help'")?,
        }
    }
    Ok(())
}

fn click(
    doc: &mut Document,
    controller: &mut PopoverController,
    target: Option<NodeId>,
    out: &mut impl Write,
) -> Result<()> {
    let event = target.map_or(PointerEvent::outside(), PointerEvent::on);
    let consumed = controller.handle_pointer(doc, event);
    info!("pointer consumed={consumed}");

    // Stand-in layout pass: measure the fresh popover and re-anchor it.
    if consumed {
        if let (Some(popover), Some(anchor)) = (controller.widget().popover(), target) {
            scene::measure_popover(doc, popover);
            controller.widget_mut().position_popover(doc, anchor);
        }
    }
    writeln!(out, "click: consumed={consumed}")?;
    Ok(())
}

fn dump(doc: &Document, out: &mut impl Write) -> Result<()> {
    dump_node(doc, doc.body(), 0, out)
}

fn dump_node(doc: &Document, node: NodeId, depth: usize, out: &mut impl Write) -> Result<()> {
    let mut line = format!("{}{}", "  ".repeat(depth), doc.tag(node));
    for class in doc.classes(node) {
        line.push('.');
        line.push_str(class);
    }
    if let Some(title) = doc.attribute(node, "data-title") {
        line.push_str(&format!(" [data-title=\"{title}\"]"));
    }
    if !doc.style(node).is_empty() {
        let style: Vec<String> = doc
            .style(node)
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect();
        line.push_str(&format!(" {{{}}}", style.join("; ")));
    }
    if !doc.text(node).is_empty() {
        line.push_str(&format!(" \"{}\"", doc.text(node)));
    }
    writeln!(out, "{line}")?;
    for &child in doc.children(node) {
        dump_node(doc, child, depth + 1, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use popover_dom::Viewport;
    use popover_widget::PopoverConfig;

    fn run_script(script: &str) -> String {
        let (mut doc, triggers) = scene::build(Viewport::new(800.0, 600.0));
        let mut controller = PopoverController::bind(&doc, PopoverConfig::default());
        let mut out = Vec::new();
        run(
            &mut doc,
            &mut controller,
            &triggers,
            script.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_click_advance_dump_cycle() {
        let output = run_script("click 1\nadvance 10\ndump\nstate\nquit\n");
        assert!(output.contains("click: consumed=true"));
        assert!(output.contains("div.popover.show"));
        assert!(output.contains("\"Save\""));
        assert!(output.contains("visible=true popover=true"));
    }

    #[test]
    fn test_escape_reports_dismissal() {
        let output = run_script("click 1\nadvance 10\nesc\n");
        assert!(output.contains("escape: dismissed=true"));
    }

    #[test]
    fn test_unknown_command_prints_hint() {
        let output = run_script("frobnicate\n");
        assert!(output.contains("unknown command"));
    }

    #[test]
    fn test_out_of_range_trigger() {
        let output = run_script("click 9\n");
        assert!(output.contains("no trigger #9"));
    }
}
