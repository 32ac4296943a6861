//! Plain-text scorecard rendering for the `score` command.

use strictly_bowling::{Frame, Game, PIN_COUNT};

fn mark(pins: u8) -> String {
    match pins {
        PIN_COUNT => "X".to_string(),
        0 => "-".to_string(),
        n => n.to_string(),
    }
}

/// Conventional roll marks for a frame: `X` strike, `/` spare, `-` miss.
pub fn frame_marks(frame: &Frame) -> String {
    let mut marks = Vec::with_capacity(3);
    if let Some(first) = frame.first_roll() {
        marks.push(mark(first));
    }
    if let Some(second) = frame.second_roll() {
        marks.push(if frame.is_spare() {
            "/".to_string()
        } else {
            mark(second)
        });
    }
    if let (Some(second), Some(third)) = (frame.second_roll(), frame.third_roll()) {
        let spare_on_reset = frame.is_strike() && second < PIN_COUNT && second + third == PIN_COUNT;
        marks.push(if spare_on_reset {
            "/".to_string()
        } else {
            mark(third)
        });
    }
    marks.join(" ")
}

/// Renders one line per frame with its marks and running total.
///
/// Frames that cannot be scored yet show an empty total.
pub fn render(game: &Game) -> String {
    let scores = game.scores();
    let mut out = String::from("Frame | Rolls  | Score | Total\n");
    for frame in game.frames() {
        let score = scores
            .iter()
            .find(|score| *score.frame_number() == frame.number());
        let (points, total) = match score {
            Some(score) => (score.score().to_string(), score.cumulative_score().to_string()),
            None => (String::new(), String::new()),
        };
        out.push_str(&format!(
            "{:>5} | {:<6} | {:>5} | {:>5}\n",
            frame.number(),
            frame_marks(frame),
            points,
            total
        ));
    }
    let status = if game.is_complete() {
        "complete"
    } else {
        "in progress"
    };
    out.push_str(&format!("Total: {} ({})\n", game.total_score(), status));
    out
}
