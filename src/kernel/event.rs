/// Inputs delivered to the driver from the console (or any other front end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User pressed send with this text
    Submit(String),
    /// Speak the self-introduction; no turn, no transcript lines
    Introduce,
    /// Close the window
    Quit,
}

// Helper for line-oriented front ends
impl InputEvent {
    pub fn from_line(line: &str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => InputEvent::Quit,
            "/intro" => InputEvent::Introduce,
            _ => InputEvent::Submit(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
        }
    }
}
