use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x003b82f6);
pub const SECONDARY: Color = Color::from_u32(0x0060a5fa);
pub const NEUTRAL: Color = Color::from_u32(0x0071717a);
pub const TEXT: Color = Color::from_u32(0x00f4f4f5);
pub const BACKGROUND: Color = Color::from_u32(0x0018181b);
pub const WARNING: Color = Color::from_u32(0x00facc15);
pub const ERROR: Color = Color::from_u32(0x00f87171);

/// Gallery tile colours, cycled by position.
pub const PLAYLIST: [Color; 13] = [
    Color::from_u32(0x00ff6b6b),
    Color::from_u32(0x004ecdc4),
    Color::from_u32(0x0045b7d1),
    Color::from_u32(0x0096ceb4),
    Color::from_u32(0x00ffeead),
    Color::from_u32(0x00d4a5a5),
    Color::from_u32(0x009b59b6),
    Color::from_u32(0x003498db),
    Color::from_u32(0x00e67e22),
    Color::from_u32(0x0027ae60),
    Color::from_u32(0x00e74c3c),
    Color::from_u32(0x00f1c40f),
    Color::from_u32(0x001abc9c),
];
