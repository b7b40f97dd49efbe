//! Runs views through egui frames without a window

use egui::{CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

use crate::{SpaceView, ViewerContext};

pub struct Harness {
    ctx: Context,
    time: f64,
    screen: Rect,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            ctx: Context::default(),
            time: 0.0,
            screen: Rect::from_min_size(Pos2::ZERO, Vec2::new(1600.0, 900.0)),
        }
    }

    /// One frame with the given input events
    pub fn frame(&mut self, view: &mut dyn SpaceView, viewer: &ViewerContext, events: Vec<Event>) {
        self.time += 1.0 / 60.0;
        let input = RawInput {
            screen_rect: Some(self.screen),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| view.ui(viewer, ui));
        });
    }

    pub fn hover(&mut self, view: &mut dyn SpaceView, viewer: &ViewerContext, pos: Pos2) {
        self.frame(view, viewer, vec![Event::PointerMoved(pos)]);
    }

    /// Press and release the primary button at `pos` over two frames
    pub fn click(&mut self, view: &mut dyn SpaceView, viewer: &ViewerContext, pos: Pos2) {
        // Far enough from any earlier click not to count as a double click
        self.time += 1.0;
        self.frame(view, viewer, vec![Event::PointerMoved(pos), primary(pos, true)]);
        self.frame(view, viewer, vec![primary(pos, false)]);
    }
}

fn primary(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}
