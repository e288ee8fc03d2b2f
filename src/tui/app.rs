use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{
    config::Settings,
    models::{Badge, EstimatorError, Mode, ProgressionResult},
    scoring::{weights, CalculationRequest},
};

const MAX_POINTS_LEN: usize = 12;
const MAX_WEIGHT_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Mode,
    Badge,
    Points,
    Weight(usize),
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Calculate,
    Quit,
}

pub struct App {
    pub mode: Mode,
    pub badge_index: usize,
    pub points_input: String,
    pub weight_inputs: Vec<String>,
    pub focus: Field,
    pub result: Option<ProgressionResult>,
    pub error_message: Option<String>,
    pub should_quit: bool,
    default_weights: Vec<Vec<u32>>,
}

impl App {
    pub fn new(settings: &Settings, mode: Mode) -> Self {
        let default_weights = Mode::ALL
            .iter()
            .map(|m| settings.defaults.weights_for(*m).to_vec())
            .collect();

        let mut app = Self {
            mode,
            badge_index: 0,
            points_input: String::new(),
            weight_inputs: Vec::new(),
            focus: Field::Points,
            result: None,
            error_message: None,
            should_quit: false,
            default_weights,
        };
        app.reset_for_mode(mode);
        app
    }

    fn reset_for_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.badge_index = mode.badges().len() - 1;
        let defaults = Mode::ALL
            .iter()
            .position(|m| *m == mode)
            .and_then(|i| self.default_weights.get(i))
            .cloned()
            .unwrap_or_else(|| vec![0; mode.category_count()]);
        self.weight_inputs = defaults.iter().map(|w| w.to_string()).collect();
        self.weight_inputs.resize(mode.category_count(), "0".to_string());
        self.result = None;
        self.error_message = None;
    }

    pub fn toggle_mode(&mut self) {
        self.reset_for_mode(self.mode.toggle());
    }

    pub fn badges(&self) -> Vec<Badge> {
        self.mode.badges()
    }

    pub fn selected_badge(&self) -> Badge {
        self.badges()
            .get(self.badge_index)
            .cloned()
            .unwrap_or_else(|| self.mode.default_goal())
    }

    pub fn cycle_badge(&mut self, forward: bool) {
        let count = self.mode.badges().len();
        self.badge_index = if forward {
            (self.badge_index + 1) % count
        } else {
            (self.badge_index + count - 1) % count
        };
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Mode, Field::Badge, Field::Points];
        fields.extend((0..self.weight_inputs.len()).map(Field::Weight));
        fields
    }

    pub fn focus_next(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.fields();
        let pos = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(pos + fields.len() - 1) % fields.len()];
    }

    pub fn weights(&self) -> Vec<u32> {
        self.weight_inputs.iter().map(|w| weights::parse_weight(w)).collect()
    }

    pub fn weight_total(&self) -> u64 {
        weights::total(&self.weights())
    }

    /// Re-applies the 100% ceiling after the weight at `index` was edited.
    pub fn on_weight_changed(&mut self, index: usize) {
        let mut values = self.weights();
        if let Some(clamped) = weights::clamp_weight(&mut values, index) {
            debug!("Weight {} clamped to {}", index, clamped);
            self.weight_inputs[index] = clamped.to_string();
        }
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            Field::Points => {
                if self.points_input.len() < MAX_POINTS_LEN {
                    self.points_input.push(c);
                }
            }
            Field::Weight(i) => {
                if !c.is_ascii_digit() {
                    return;
                }
                if let Some(input) = self.weight_inputs.get_mut(i) {
                    if input.as_str() == "0" {
                        input.clear();
                    }
                    if input.len() < MAX_WEIGHT_LEN {
                        input.push(c);
                    }
                }
                self.on_weight_changed(i);
            }
            Field::Mode | Field::Badge => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Field::Points => {
                self.points_input.pop();
            }
            Field::Weight(i) => {
                if let Some(input) = self.weight_inputs.get_mut(i) {
                    input.pop();
                }
            }
            Field::Mode | Field::Badge => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Action::Quit;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return Action::Quit;
            }
            KeyCode::Enter => return Action::Calculate,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match self.focus {
                    Field::Mode => self.toggle_mode(),
                    Field::Badge => self.cycle_badge(forward),
                    _ => {}
                }
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Char(c) => self.input_char(c),
            _ => {}
        }
        Action::None
    }

    pub fn request(&self) -> CalculationRequest {
        CalculationRequest {
            mode: self.mode,
            goal: self.selected_badge(),
            current_points: self.points_input.clone(),
            weights: self.weights(),
        }
    }

    /// Errors leave the previous result on screen.
    pub fn apply_calculation(&mut self, outcome: Result<ProgressionResult, EstimatorError>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error_message = None;
            }
            Err(e) => {
                self.error_message = Some(e.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_top_badge_with_default_weights() {
        let app = App::new(&Settings::default(), Mode::WorldTour);
        assert_eq!(app.selected_badge(), Badge::new("Emerald 1", 2400));
        assert_eq!(app.weights(), vec![50, 25, 15, 10]);
        assert_eq!(app.focus, Field::Points);
    }

    #[test]
    fn test_toggle_mode_swaps_tables() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        app.focus = Field::Mode;
        app.handle_key(key(KeyCode::Right));

        assert_eq!(app.mode, Mode::QuickPlay);
        assert_eq!(app.selected_badge(), Badge::new("Gold 1", 1300));
        assert_eq!(app.weights(), vec![20, 20, 20, 20, 20]);
    }

    #[test]
    fn test_badge_cycles_wrap() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        app.focus = Field::Badge;
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selected_badge().label, "Bronze 4");
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.selected_badge().label, "Emerald 1");
    }

    #[test]
    fn test_weight_edit_is_clamped_on_every_keystroke() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        app.focus = Field::Weight(3);

        // Others sum to 90, so only 10 fits
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Backspace));
        type_str(&mut app, "45");

        assert_eq!(app.weight_inputs[3], "10");
        assert_eq!(app.weight_total(), 100);
    }

    #[test]
    fn test_weight_field_ignores_non_digits() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        app.focus = Field::Weight(0);
        type_str(&mut app, "x-");
        assert_eq!(app.weight_inputs[0], "50");
    }

    #[test]
    fn test_focus_cycles_through_weights() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        for _ in 0..4 {
            app.focus_next();
        }
        assert_eq!(app.focus, Field::Weight(3));
        app.focus_next();
        assert_eq!(app.focus, Field::Mode);
        app.focus_prev();
        assert_eq!(app.focus, Field::Weight(3));
    }

    #[test]
    fn test_enter_and_escape() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::Calculate);
        assert_eq!(app.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_error_keeps_previous_result() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        let previous = ProgressionResult {
            goal: Badge::new("Emerald 1", 2400),
            points_remaining: 10,
            categories: Vec::new(),
            weighted_playtime_minutes: 0.0,
            outlook: crate::models::SeasonOutlook::Ended { days_remaining: 0 },
            next_badge: None,
        };
        app.apply_calculation(Ok(previous.clone()));
        app.apply_calculation(Err(EstimatorError::InvalidNumericInput("x".to_string())));

        assert_eq!(app.result, Some(previous));
        assert_eq!(app.error_message.as_deref(), Some("Please enter a valid number"));
    }

    #[test]
    fn test_request_carries_raw_points() {
        let mut app = App::new(&Settings::default(), Mode::WorldTour);
        type_str(&mut app, "2350");
        let request = app.request();
        assert_eq!(request.current_points, "2350");
        assert_eq!(request.goal.threshold, 2400);
        assert_eq!(request.weights, vec![50, 25, 15, 10]);
    }
}
