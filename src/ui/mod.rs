pub mod flight_scene;
pub mod game_common;

use crate::flight::FlightController;
use ratatui::Frame;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, flight: &FlightController) {
    let area = frame.size();
    flight_scene::render_flight_scene(frame, area, flight);
}
