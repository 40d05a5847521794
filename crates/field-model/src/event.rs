//! Host events delivered to a running field.
//!
//! Scripts of events are stored as JSONL, one event per line, stamped with
//! the frame on which they are delivered. Lines starting with `#` are
//! comments.

use serde::{Deserialize, Serialize};
use toolfield_common::error::{ToolfieldError, ToolfieldResult};

use crate::geometry::{Point2D, ViewportSize};

/// Something the host environment tells the animation about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The pointer moved to `(x, y)` in viewport pixels.
    PointerMove { x: f64, y: f64 },

    /// The viewport changed size.
    Resize { width: f64, height: f64 },
}

impl HostEvent {
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn resize(width: f64, height: f64) -> Self {
        Self::Resize { width, height }
    }

    /// The pointer position carried by this event, if any.
    pub fn pointer_position(&self) -> Option<Point2D> {
        match *self {
            HostEvent::PointerMove { x, y } => Some(Point2D::new(x, y)),
            HostEvent::Resize { .. } => None,
        }
    }

    /// The new viewport carried by this event, if any.
    pub fn viewport(&self) -> Option<ViewportSize> {
        match *self {
            HostEvent::Resize { width, height } => Some(ViewportSize::new(width, height)),
            HostEvent::PointerMove { .. } => None,
        }
    }
}

/// A host event delivered before the given frame is painted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScriptedEvent {
    pub frame: u64,

    #[serde(flatten)]
    pub event: HostEvent,
}

impl ScriptedEvent {
    pub fn new(frame: u64, event: HostEvent) -> Self {
        Self { frame, event }
    }
}

/// Parse a JSONL event script. Events are returned sorted by frame,
/// keeping file order for events on the same frame.
pub fn parse_events(jsonl: &str) -> ToolfieldResult<Vec<ScriptedEvent>> {
    let mut events = Vec::new();
    for (index, line) in jsonl.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: ScriptedEvent = serde_json::from_str(line)
            .map_err(|e| ToolfieldError::invalid_event(index + 1, e.to_string()))?;
        if let HostEvent::Resize { width, height } = event.event {
            if !(width >= 0.0 && height >= 0.0) {
                return Err(ToolfieldError::invalid_event(
                    index + 1,
                    "resize dimensions must not be negative",
                ));
            }
        }
        events.push(event);
    }
    events.sort_by_key(|e| e.frame);
    Ok(events)
}

/// Serialize events to JSONL format.
pub fn serialize_events(events: &[ScriptedEvent]) -> ToolfieldResult<String> {
    let mut output = String::new();
    for event in events {
        output.push_str(&serde_json::to_string(event)?);
        output.push('\n');
    }
    Ok(output)
}

/// A pointer circling the viewport centre, one move per frame.
///
/// Useful for previewing the repulsion effect without a recorded script.
pub fn orbit_events(viewport: ViewportSize, frames: u64, revolutions: f64) -> Vec<ScriptedEvent> {
    let cx = viewport.width / 2.0;
    let cy = viewport.height / 2.0;
    let radius = viewport.width.min(viewport.height) * 0.3;
    let total = frames.max(1) as f64;

    (0..frames)
        .map(|frame| {
            let angle = std::f64::consts::TAU * revolutions * frame as f64 / total;
            ScriptedEvent::new(
                frame,
                HostEvent::pointer(cx + radius * angle.cos(), cy + radius * angle.sin()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_sorts() {
        let script = r#"
# recorded on the portfolio page
{"frame": 10, "type": "resize", "width": 800, "height": 600}
{"frame": 2, "type": "pointer_move", "x": 12.5, "y": 40}

{"frame": 10, "type": "pointer_move", "x": 1, "y": 2}
"#;
        let events = parse_events(script).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ScriptedEvent::new(2, HostEvent::pointer(12.5, 40.0)));
        assert_eq!(events[1].event.viewport(), Some(ViewportSize::new(800.0, 600.0)));
        assert_eq!(events[2].event.pointer_position(), Some(Point2D::new(1.0, 2.0)));
    }

    #[test]
    fn test_parse_reports_line_number() {
        let script = "{\"frame\": 0, \"type\": \"pointer_move\", \"x\": 1, \"y\": 1}\nnot json\n";
        match parse_events(script) {
            Err(ToolfieldError::InvalidEvent { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected InvalidEvent, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative_resize() {
        let script = r#"{"frame": 0, "type": "resize", "width": -1, "height": 10}"#;
        assert!(parse_events(script).is_err());
    }

    #[test]
    fn test_serialize_is_parseable() {
        let events = vec![
            ScriptedEvent::new(0, HostEvent::pointer(5.0, 6.0)),
            ScriptedEvent::new(3, HostEvent::resize(320.0, 240.0)),
        ];
        let jsonl = serialize_events(&events).unwrap();
        assert_eq!(jsonl.lines().count(), 2);
        assert_eq!(parse_events(&jsonl).unwrap(), events);
    }

    #[test]
    fn test_orbit_stays_inside_viewport() {
        let viewport = ViewportSize::new(640.0, 480.0);
        let events = orbit_events(viewport, 90, 1.0);
        assert_eq!(events.len(), 90);
        for e in &events {
            let p = e.event.pointer_position().unwrap();
            assert!(p.x > 0.0 && p.x < 640.0);
            assert!(p.y > 0.0 && p.y < 480.0);
        }
    }
}
