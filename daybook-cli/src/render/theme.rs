use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// One Dark colors used by the dashboard output.
pub struct Palette;

impl Palette {
    pub const FG: Color = Color::Rgb { r: 0xAB, g: 0xB2, b: 0xBF }; // #ABB2BF
    pub const RED: Color = Color::Rgb { r: 0xE0, g: 0x6C, b: 0x75 }; // #E06C75
    pub const YELLOW: Color = Color::Rgb { r: 0xE5, g: 0xC0, b: 0x7B }; // #E5C07B
    pub const GREEN: Color = Color::Rgb { r: 0x98, g: 0xC3, b: 0x79 }; // #98C379
    pub const BLUE: Color = Color::Rgb { r: 0x61, g: 0xAF, b: 0xEF }; // #61AFEF
    pub const PURPLE: Color = Color::Rgb { r: 0xC6, g: 0x78, b: 0xDD }; // #C678DD
    pub const COMMENT: Color = Color::Rgb { r: 0x5C, g: 0x63, b: 0x70 }; // #5C6370

    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();
        skin.paragraph.set_fg(Self::FG);
        skin.bold.set_fg(Self::YELLOW);
        // Days outside the viewed month are rendered in italics.
        skin.italic.set_fg(Self::COMMENT);

        skin.headers[0].set_fg(Self::RED);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;
        skin.headers[1].set_fg(Self::YELLOW);
        skin.headers[1].add_attr(Attribute::Bold);

        skin.table.set_fg(Self::PURPLE);
        skin.table.align = Alignment::Center;
        skin.bullet.set_fg(Self::RED);
        skin.inline_code.set_fg(Self::GREEN);
        skin
    }
}
