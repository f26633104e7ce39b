// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Time for one full turn of the arc.
const TURN_PERIOD: Duration = Duration::from_millis(1200);

/// Period of the ring's breathing effect.
const PULSE_PERIOD: Duration = Duration::from_millis(1600);

/// Rotating arc over a pulsing ring, drawn for a given elapsed time.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32, // Rotation angle in radians
    pulse: f32,    // 0 to 1
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at the phase reached after `elapsed`.
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation_at(elapsed),
            pulse: pulse_at(elapsed),
            color,
            size: sizing::LOADER_SPINNER,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

fn rotation_at(elapsed: Duration) -> f32 {
    let phase = elapsed.as_secs_f32() / TURN_PERIOD.as_secs_f32();
    phase.fract() * TAU
}

/// Smooth 0..1..0 wave.
fn pulse_at(elapsed: Duration) -> f32 {
    let phase = elapsed.as_secs_f32() / PULSE_PERIOD.as_secs_f32();
    0.5 - 0.5 * (phase.fract() * TAU).cos()
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 6.0;

                // Breathing ring
                let ring = Path::circle(center, radius - 2.0 * self.pulse);
                frame.stroke(
                    &ring,
                    Stroke::default()
                        .with_width(3.0 + 2.0 * self.pulse)
                        .with_color(Color {
                            a: 0.15 + 0.2 * self.pulse,
                            ..self.color
                        }),
                );

                // Rotating quarter-and-a-half arc, starting at the top
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI * 0.75;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 30;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(4.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
