use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub bar: Color,        // Neutral bar
    pub comparing: Color,  // Yellow
    pub swapping: Color,   // Red-pink
    pub min_index: Color,  // Mauve
    pub eliminated: Color, // Dim grey
    pub breakpoint: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    bar: Color::Rgb(137, 180, 250),
    comparing: Color::Rgb(249, 226, 175),
    swapping: Color::Rgb(243, 139, 168),
    min_index: Color::Rgb(203, 166, 247),
    eliminated: Color::Rgb(69, 71, 90),
    breakpoint: Color::Rgb(235, 80, 100),
};
