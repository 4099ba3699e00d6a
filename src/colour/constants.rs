//! Named colour constants
//!
//! The standard table of web colour names, byte-exact. Consumers treat
//! these names and values as a stable external contract, so entries must
//! never be re-tuned.
//!
//! Values are 8-bit RGBA as authored, i.e. gamma-corrected; wrap them in
//! [`crate::SrgbColour`] before doing arithmetic on them.

use super::colour4::Colour4;

impl Colour4 {
    /// The colour with (R, G, B, A) = (255, 255, 255, 0).
    #[inline]
    pub fn transparent() -> Colour4 {
        Colour4::from_rgba8(255, 255, 255, 0)
    }

    /// The colour with (R, G, B, A) = (240, 248, 255, 255).
    #[inline]
    pub fn alice_blue() -> Colour4 {
        Colour4::from_rgba8(240, 248, 255, 255)
    }

    /// The colour with (R, G, B, A) = (250, 235, 215, 255).
    #[inline]
    pub fn antique_white() -> Colour4 {
        Colour4::from_rgba8(250, 235, 215, 255)
    }

    /// The colour with (R, G, B, A) = (0, 255, 255, 255).
    #[inline]
    pub fn aqua() -> Colour4 {
        Colour4::from_rgba8(0, 255, 255, 255)
    }

    /// The colour with (R, G, B, A) = (127, 255, 212, 255).
    #[inline]
    pub fn aquamarine() -> Colour4 {
        Colour4::from_rgba8(127, 255, 212, 255)
    }

    /// The colour with (R, G, B, A) = (240, 255, 255, 255).
    #[inline]
    pub fn azure() -> Colour4 {
        Colour4::from_rgba8(240, 255, 255, 255)
    }

    /// The colour with (R, G, B, A) = (245, 245, 220, 255).
    #[inline]
    pub fn beige() -> Colour4 {
        Colour4::from_rgba8(245, 245, 220, 255)
    }

    /// The colour with (R, G, B, A) = (255, 228, 196, 255).
    #[inline]
    pub fn bisque() -> Colour4 {
        Colour4::from_rgba8(255, 228, 196, 255)
    }

    /// The colour with (R, G, B, A) = (0, 0, 0, 255).
    #[inline]
    pub fn black() -> Colour4 {
        Colour4::from_rgba8(0, 0, 0, 255)
    }

    /// The colour with (R, G, B, A) = (255, 235, 205, 255).
    #[inline]
    pub fn blanched_almond() -> Colour4 {
        Colour4::from_rgba8(255, 235, 205, 255)
    }

    /// The colour with (R, G, B, A) = (0, 0, 255, 255).
    #[inline]
    pub fn blue() -> Colour4 {
        Colour4::from_rgba8(0, 0, 255, 255)
    }

    /// The colour with (R, G, B, A) = (138, 43, 226, 255).
    #[inline]
    pub fn blue_violet() -> Colour4 {
        Colour4::from_rgba8(138, 43, 226, 255)
    }

    /// The colour with (R, G, B, A) = (165, 42, 42, 255).
    #[inline]
    pub fn brown() -> Colour4 {
        Colour4::from_rgba8(165, 42, 42, 255)
    }

    /// The colour with (R, G, B, A) = (222, 184, 135, 255).
    #[inline]
    pub fn burly_wood() -> Colour4 {
        Colour4::from_rgba8(222, 184, 135, 255)
    }

    /// The colour with (R, G, B, A) = (95, 158, 160, 255).
    #[inline]
    pub fn cadet_blue() -> Colour4 {
        Colour4::from_rgba8(95, 158, 160, 255)
    }

    /// The colour with (R, G, B, A) = (127, 255, 0, 255).
    #[inline]
    pub fn chartreuse() -> Colour4 {
        Colour4::from_rgba8(127, 255, 0, 255)
    }

    /// The colour with (R, G, B, A) = (210, 105, 30, 255).
    #[inline]
    pub fn chocolate() -> Colour4 {
        Colour4::from_rgba8(210, 105, 30, 255)
    }

    /// The colour with (R, G, B, A) = (255, 127, 80, 255).
    #[inline]
    pub fn coral() -> Colour4 {
        Colour4::from_rgba8(255, 127, 80, 255)
    }

    /// The colour with (R, G, B, A) = (100, 149, 237, 255).
    #[inline]
    pub fn cornflower_blue() -> Colour4 {
        Colour4::from_rgba8(100, 149, 237, 255)
    }

    /// The colour with (R, G, B, A) = (255, 248, 220, 255).
    #[inline]
    pub fn cornsilk() -> Colour4 {
        Colour4::from_rgba8(255, 248, 220, 255)
    }

    /// The colour with (R, G, B, A) = (220, 20, 60, 255).
    #[inline]
    pub fn crimson() -> Colour4 {
        Colour4::from_rgba8(220, 20, 60, 255)
    }

    /// The colour with (R, G, B, A) = (0, 255, 255, 255).
    #[inline]
    pub fn cyan() -> Colour4 {
        Colour4::from_rgba8(0, 255, 255, 255)
    }

    /// The colour with (R, G, B, A) = (0, 0, 139, 255).
    #[inline]
    pub fn dark_blue() -> Colour4 {
        Colour4::from_rgba8(0, 0, 139, 255)
    }

    /// The colour with (R, G, B, A) = (0, 139, 139, 255).
    #[inline]
    pub fn dark_cyan() -> Colour4 {
        Colour4::from_rgba8(0, 139, 139, 255)
    }

    /// The colour with (R, G, B, A) = (184, 134, 11, 255).
    #[inline]
    pub fn dark_goldenrod() -> Colour4 {
        Colour4::from_rgba8(184, 134, 11, 255)
    }

    /// The colour with (R, G, B, A) = (169, 169, 169, 255).
    #[inline]
    pub fn dark_gray() -> Colour4 {
        Colour4::from_rgba8(169, 169, 169, 255)
    }

    /// The colour with (R, G, B, A) = (0, 100, 0, 255).
    #[inline]
    pub fn dark_green() -> Colour4 {
        Colour4::from_rgba8(0, 100, 0, 255)
    }

    /// The colour with (R, G, B, A) = (189, 183, 107, 255).
    #[inline]
    pub fn dark_khaki() -> Colour4 {
        Colour4::from_rgba8(189, 183, 107, 255)
    }

    /// The colour with (R, G, B, A) = (139, 0, 139, 255).
    #[inline]
    pub fn dark_magenta() -> Colour4 {
        Colour4::from_rgba8(139, 0, 139, 255)
    }

    /// The colour with (R, G, B, A) = (85, 107, 47, 255).
    #[inline]
    pub fn dark_olive_green() -> Colour4 {
        Colour4::from_rgba8(85, 107, 47, 255)
    }

    /// The colour with (R, G, B, A) = (255, 140, 0, 255).
    #[inline]
    pub fn dark_orange() -> Colour4 {
        Colour4::from_rgba8(255, 140, 0, 255)
    }

    /// The colour with (R, G, B, A) = (153, 50, 204, 255).
    #[inline]
    pub fn dark_orchid() -> Colour4 {
        Colour4::from_rgba8(153, 50, 204, 255)
    }

    /// The colour with (R, G, B, A) = (139, 0, 0, 255).
    #[inline]
    pub fn dark_red() -> Colour4 {
        Colour4::from_rgba8(139, 0, 0, 255)
    }

    /// The colour with (R, G, B, A) = (233, 150, 122, 255).
    #[inline]
    pub fn dark_salmon() -> Colour4 {
        Colour4::from_rgba8(233, 150, 122, 255)
    }

    /// The colour with (R, G, B, A) = (143, 188, 139, 255).
    #[inline]
    pub fn dark_sea_green() -> Colour4 {
        Colour4::from_rgba8(143, 188, 139, 255)
    }

    /// The colour with (R, G, B, A) = (72, 61, 139, 255).
    #[inline]
    pub fn dark_slate_blue() -> Colour4 {
        Colour4::from_rgba8(72, 61, 139, 255)
    }

    /// The colour with (R, G, B, A) = (47, 79, 79, 255).
    #[inline]
    pub fn dark_slate_gray() -> Colour4 {
        Colour4::from_rgba8(47, 79, 79, 255)
    }

    /// The colour with (R, G, B, A) = (0, 206, 209, 255).
    #[inline]
    pub fn dark_turquoise() -> Colour4 {
        Colour4::from_rgba8(0, 206, 209, 255)
    }

    /// The colour with (R, G, B, A) = (148, 0, 211, 255).
    #[inline]
    pub fn dark_violet() -> Colour4 {
        Colour4::from_rgba8(148, 0, 211, 255)
    }

    /// The colour with (R, G, B, A) = (255, 20, 147, 255).
    #[inline]
    pub fn deep_pink() -> Colour4 {
        Colour4::from_rgba8(255, 20, 147, 255)
    }

    /// The colour with (R, G, B, A) = (0, 191, 255, 255).
    #[inline]
    pub fn deep_sky_blue() -> Colour4 {
        Colour4::from_rgba8(0, 191, 255, 255)
    }

    /// The colour with (R, G, B, A) = (105, 105, 105, 255).
    #[inline]
    pub fn dim_gray() -> Colour4 {
        Colour4::from_rgba8(105, 105, 105, 255)
    }

    /// The colour with (R, G, B, A) = (30, 144, 255, 255).
    #[inline]
    pub fn dodger_blue() -> Colour4 {
        Colour4::from_rgba8(30, 144, 255, 255)
    }

    /// The colour with (R, G, B, A) = (178, 34, 34, 255).
    #[inline]
    pub fn firebrick() -> Colour4 {
        Colour4::from_rgba8(178, 34, 34, 255)
    }

    /// The colour with (R, G, B, A) = (255, 250, 240, 255).
    #[inline]
    pub fn floral_white() -> Colour4 {
        Colour4::from_rgba8(255, 250, 240, 255)
    }

    /// The colour with (R, G, B, A) = (34, 139, 34, 255).
    #[inline]
    pub fn forest_green() -> Colour4 {
        Colour4::from_rgba8(34, 139, 34, 255)
    }

    /// The colour with (R, G, B, A) = (255, 0, 255, 255).
    #[inline]
    pub fn fuchsia() -> Colour4 {
        Colour4::from_rgba8(255, 0, 255, 255)
    }

    /// The colour with (R, G, B, A) = (220, 220, 220, 255).
    #[inline]
    pub fn gainsboro() -> Colour4 {
        Colour4::from_rgba8(220, 220, 220, 255)
    }

    /// The colour with (R, G, B, A) = (248, 248, 255, 255).
    #[inline]
    pub fn ghost_white() -> Colour4 {
        Colour4::from_rgba8(248, 248, 255, 255)
    }

    /// The colour with (R, G, B, A) = (255, 215, 0, 255).
    #[inline]
    pub fn gold() -> Colour4 {
        Colour4::from_rgba8(255, 215, 0, 255)
    }

    /// The colour with (R, G, B, A) = (218, 165, 32, 255).
    #[inline]
    pub fn goldenrod() -> Colour4 {
        Colour4::from_rgba8(218, 165, 32, 255)
    }

    /// The colour with (R, G, B, A) = (128, 128, 128, 255).
    #[inline]
    pub fn gray() -> Colour4 {
        Colour4::from_rgba8(128, 128, 128, 255)
    }

    /// The colour with (R, G, B, A) = (0, 128, 0, 255).
    #[inline]
    pub fn green() -> Colour4 {
        Colour4::from_rgba8(0, 128, 0, 255)
    }

    /// The colour with (R, G, B, A) = (173, 255, 47, 255).
    #[inline]
    pub fn green_yellow() -> Colour4 {
        Colour4::from_rgba8(173, 255, 47, 255)
    }

    /// The colour with (R, G, B, A) = (240, 255, 240, 255).
    #[inline]
    pub fn honeydew() -> Colour4 {
        Colour4::from_rgba8(240, 255, 240, 255)
    }

    /// The colour with (R, G, B, A) = (255, 105, 180, 255).
    #[inline]
    pub fn hot_pink() -> Colour4 {
        Colour4::from_rgba8(255, 105, 180, 255)
    }

    /// The colour with (R, G, B, A) = (205, 92, 92, 255).
    #[inline]
    pub fn indian_red() -> Colour4 {
        Colour4::from_rgba8(205, 92, 92, 255)
    }

    /// The colour with (R, G, B, A) = (75, 0, 130, 255).
    #[inline]
    pub fn indigo() -> Colour4 {
        Colour4::from_rgba8(75, 0, 130, 255)
    }

    /// The colour with (R, G, B, A) = (255, 255, 240, 255).
    #[inline]
    pub fn ivory() -> Colour4 {
        Colour4::from_rgba8(255, 255, 240, 255)
    }

    /// The colour with (R, G, B, A) = (240, 230, 140, 255).
    #[inline]
    pub fn khaki() -> Colour4 {
        Colour4::from_rgba8(240, 230, 140, 255)
    }

    /// The colour with (R, G, B, A) = (230, 230, 250, 255).
    #[inline]
    pub fn lavender() -> Colour4 {
        Colour4::from_rgba8(230, 230, 250, 255)
    }

    /// The colour with (R, G, B, A) = (255, 240, 245, 255).
    #[inline]
    pub fn lavender_blush() -> Colour4 {
        Colour4::from_rgba8(255, 240, 245, 255)
    }

    /// The colour with (R, G, B, A) = (124, 252, 0, 255).
    #[inline]
    pub fn lawn_green() -> Colour4 {
        Colour4::from_rgba8(124, 252, 0, 255)
    }

    /// The colour with (R, G, B, A) = (255, 250, 205, 255).
    #[inline]
    pub fn lemon_chiffon() -> Colour4 {
        Colour4::from_rgba8(255, 250, 205, 255)
    }

    /// The colour with (R, G, B, A) = (173, 216, 230, 255).
    #[inline]
    pub fn light_blue() -> Colour4 {
        Colour4::from_rgba8(173, 216, 230, 255)
    }

    /// The colour with (R, G, B, A) = (240, 128, 128, 255).
    #[inline]
    pub fn light_coral() -> Colour4 {
        Colour4::from_rgba8(240, 128, 128, 255)
    }

    /// The colour with (R, G, B, A) = (224, 255, 255, 255).
    #[inline]
    pub fn light_cyan() -> Colour4 {
        Colour4::from_rgba8(224, 255, 255, 255)
    }

    /// The colour with (R, G, B, A) = (250, 250, 210, 255).
    #[inline]
    pub fn light_goldenrod_yellow() -> Colour4 {
        Colour4::from_rgba8(250, 250, 210, 255)
    }

    /// The colour with (R, G, B, A) = (144, 238, 144, 255).
    #[inline]
    pub fn light_green() -> Colour4 {
        Colour4::from_rgba8(144, 238, 144, 255)
    }

    /// The colour with (R, G, B, A) = (211, 211, 211, 255).
    #[inline]
    pub fn light_gray() -> Colour4 {
        Colour4::from_rgba8(211, 211, 211, 255)
    }

    /// The colour with (R, G, B, A) = (255, 182, 193, 255).
    #[inline]
    pub fn light_pink() -> Colour4 {
        Colour4::from_rgba8(255, 182, 193, 255)
    }

    /// The colour with (R, G, B, A) = (255, 160, 122, 255).
    #[inline]
    pub fn light_salmon() -> Colour4 {
        Colour4::from_rgba8(255, 160, 122, 255)
    }

    /// The colour with (R, G, B, A) = (32, 178, 170, 255).
    #[inline]
    pub fn light_sea_green() -> Colour4 {
        Colour4::from_rgba8(32, 178, 170, 255)
    }

    /// The colour with (R, G, B, A) = (135, 206, 250, 255).
    #[inline]
    pub fn light_sky_blue() -> Colour4 {
        Colour4::from_rgba8(135, 206, 250, 255)
    }

    /// The colour with (R, G, B, A) = (119, 136, 153, 255).
    #[inline]
    pub fn light_slate_gray() -> Colour4 {
        Colour4::from_rgba8(119, 136, 153, 255)
    }

    /// The colour with (R, G, B, A) = (176, 196, 222, 255).
    #[inline]
    pub fn light_steel_blue() -> Colour4 {
        Colour4::from_rgba8(176, 196, 222, 255)
    }

    /// The colour with (R, G, B, A) = (255, 255, 224, 255).
    #[inline]
    pub fn light_yellow() -> Colour4 {
        Colour4::from_rgba8(255, 255, 224, 255)
    }

    /// The colour with (R, G, B, A) = (0, 255, 0, 255).
    #[inline]
    pub fn lime() -> Colour4 {
        Colour4::from_rgba8(0, 255, 0, 255)
    }

    /// The colour with (R, G, B, A) = (50, 205, 50, 255).
    #[inline]
    pub fn lime_green() -> Colour4 {
        Colour4::from_rgba8(50, 205, 50, 255)
    }

    /// The colour with (R, G, B, A) = (250, 240, 230, 255).
    #[inline]
    pub fn linen() -> Colour4 {
        Colour4::from_rgba8(250, 240, 230, 255)
    }

    /// The colour with (R, G, B, A) = (255, 0, 255, 255).
    #[inline]
    pub fn magenta() -> Colour4 {
        Colour4::from_rgba8(255, 0, 255, 255)
    }

    /// The colour with (R, G, B, A) = (128, 0, 0, 255).
    #[inline]
    pub fn maroon() -> Colour4 {
        Colour4::from_rgba8(128, 0, 0, 255)
    }

    /// The colour with (R, G, B, A) = (102, 205, 170, 255).
    #[inline]
    pub fn medium_aquamarine() -> Colour4 {
        Colour4::from_rgba8(102, 205, 170, 255)
    }

    /// The colour with (R, G, B, A) = (0, 0, 205, 255).
    #[inline]
    pub fn medium_blue() -> Colour4 {
        Colour4::from_rgba8(0, 0, 205, 255)
    }

    /// The colour with (R, G, B, A) = (186, 85, 211, 255).
    #[inline]
    pub fn medium_orchid() -> Colour4 {
        Colour4::from_rgba8(186, 85, 211, 255)
    }

    /// The colour with (R, G, B, A) = (147, 112, 219, 255).
    #[inline]
    pub fn medium_purple() -> Colour4 {
        Colour4::from_rgba8(147, 112, 219, 255)
    }

    /// The colour with (R, G, B, A) = (60, 179, 113, 255).
    #[inline]
    pub fn medium_sea_green() -> Colour4 {
        Colour4::from_rgba8(60, 179, 113, 255)
    }

    /// The colour with (R, G, B, A) = (123, 104, 238, 255).
    #[inline]
    pub fn medium_slate_blue() -> Colour4 {
        Colour4::from_rgba8(123, 104, 238, 255)
    }

    /// The colour with (R, G, B, A) = (0, 250, 154, 255).
    #[inline]
    pub fn medium_spring_green() -> Colour4 {
        Colour4::from_rgba8(0, 250, 154, 255)
    }

    /// The colour with (R, G, B, A) = (72, 209, 204, 255).
    #[inline]
    pub fn medium_turquoise() -> Colour4 {
        Colour4::from_rgba8(72, 209, 204, 255)
    }

    /// The colour with (R, G, B, A) = (199, 21, 133, 255).
    #[inline]
    pub fn medium_violet_red() -> Colour4 {
        Colour4::from_rgba8(199, 21, 133, 255)
    }

    /// The colour with (R, G, B, A) = (25, 25, 112, 255).
    #[inline]
    pub fn midnight_blue() -> Colour4 {
        Colour4::from_rgba8(25, 25, 112, 255)
    }

    /// The colour with (R, G, B, A) = (245, 255, 250, 255).
    #[inline]
    pub fn mint_cream() -> Colour4 {
        Colour4::from_rgba8(245, 255, 250, 255)
    }

    /// The colour with (R, G, B, A) = (255, 228, 225, 255).
    #[inline]
    pub fn misty_rose() -> Colour4 {
        Colour4::from_rgba8(255, 228, 225, 255)
    }

    /// The colour with (R, G, B, A) = (255, 228, 181, 255).
    #[inline]
    pub fn moccasin() -> Colour4 {
        Colour4::from_rgba8(255, 228, 181, 255)
    }

    /// The colour with (R, G, B, A) = (255, 222, 173, 255).
    #[inline]
    pub fn navajo_white() -> Colour4 {
        Colour4::from_rgba8(255, 222, 173, 255)
    }

    /// The colour with (R, G, B, A) = (0, 0, 128, 255).
    #[inline]
    pub fn navy() -> Colour4 {
        Colour4::from_rgba8(0, 0, 128, 255)
    }

    /// The colour with (R, G, B, A) = (253, 245, 230, 255).
    #[inline]
    pub fn old_lace() -> Colour4 {
        Colour4::from_rgba8(253, 245, 230, 255)
    }

    /// The colour with (R, G, B, A) = (128, 128, 0, 255).
    #[inline]
    pub fn olive() -> Colour4 {
        Colour4::from_rgba8(128, 128, 0, 255)
    }

    /// The colour with (R, G, B, A) = (107, 142, 35, 255).
    #[inline]
    pub fn olive_drab() -> Colour4 {
        Colour4::from_rgba8(107, 142, 35, 255)
    }

    /// The colour with (R, G, B, A) = (255, 165, 0, 255).
    #[inline]
    pub fn orange() -> Colour4 {
        Colour4::from_rgba8(255, 165, 0, 255)
    }

    /// The colour with (R, G, B, A) = (255, 69, 0, 255).
    #[inline]
    pub fn orange_red() -> Colour4 {
        Colour4::from_rgba8(255, 69, 0, 255)
    }

    /// The colour with (R, G, B, A) = (218, 112, 214, 255).
    #[inline]
    pub fn orchid() -> Colour4 {
        Colour4::from_rgba8(218, 112, 214, 255)
    }

    /// The colour with (R, G, B, A) = (238, 232, 170, 255).
    #[inline]
    pub fn pale_goldenrod() -> Colour4 {
        Colour4::from_rgba8(238, 232, 170, 255)
    }

    /// The colour with (R, G, B, A) = (152, 251, 152, 255).
    #[inline]
    pub fn pale_green() -> Colour4 {
        Colour4::from_rgba8(152, 251, 152, 255)
    }

    /// The colour with (R, G, B, A) = (175, 238, 238, 255).
    #[inline]
    pub fn pale_turquoise() -> Colour4 {
        Colour4::from_rgba8(175, 238, 238, 255)
    }

    /// The colour with (R, G, B, A) = (219, 112, 147, 255).
    #[inline]
    pub fn pale_violet_red() -> Colour4 {
        Colour4::from_rgba8(219, 112, 147, 255)
    }

    /// The colour with (R, G, B, A) = (255, 239, 213, 255).
    #[inline]
    pub fn papaya_whip() -> Colour4 {
        Colour4::from_rgba8(255, 239, 213, 255)
    }

    /// The colour with (R, G, B, A) = (255, 218, 185, 255).
    #[inline]
    pub fn peach_puff() -> Colour4 {
        Colour4::from_rgba8(255, 218, 185, 255)
    }

    /// The colour with (R, G, B, A) = (205, 133, 63, 255).
    #[inline]
    pub fn peru() -> Colour4 {
        Colour4::from_rgba8(205, 133, 63, 255)
    }

    /// The colour with (R, G, B, A) = (255, 192, 203, 255).
    #[inline]
    pub fn pink() -> Colour4 {
        Colour4::from_rgba8(255, 192, 203, 255)
    }

    /// The colour with (R, G, B, A) = (221, 160, 221, 255).
    #[inline]
    pub fn plum() -> Colour4 {
        Colour4::from_rgba8(221, 160, 221, 255)
    }

    /// The colour with (R, G, B, A) = (176, 224, 230, 255).
    #[inline]
    pub fn powder_blue() -> Colour4 {
        Colour4::from_rgba8(176, 224, 230, 255)
    }

    /// The colour with (R, G, B, A) = (128, 0, 128, 255).
    #[inline]
    pub fn purple() -> Colour4 {
        Colour4::from_rgba8(128, 0, 128, 255)
    }

    /// The colour with (R, G, B, A) = (255, 0, 0, 255).
    #[inline]
    pub fn red() -> Colour4 {
        Colour4::from_rgba8(255, 0, 0, 255)
    }

    /// The colour with (R, G, B, A) = (188, 143, 143, 255).
    #[inline]
    pub fn rosy_brown() -> Colour4 {
        Colour4::from_rgba8(188, 143, 143, 255)
    }

    /// The colour with (R, G, B, A) = (65, 105, 225, 255).
    #[inline]
    pub fn royal_blue() -> Colour4 {
        Colour4::from_rgba8(65, 105, 225, 255)
    }

    /// The colour with (R, G, B, A) = (139, 69, 19, 255).
    #[inline]
    pub fn saddle_brown() -> Colour4 {
        Colour4::from_rgba8(139, 69, 19, 255)
    }

    /// The colour with (R, G, B, A) = (250, 128, 114, 255).
    #[inline]
    pub fn salmon() -> Colour4 {
        Colour4::from_rgba8(250, 128, 114, 255)
    }

    /// The colour with (R, G, B, A) = (244, 164, 96, 255).
    #[inline]
    pub fn sandy_brown() -> Colour4 {
        Colour4::from_rgba8(244, 164, 96, 255)
    }

    /// The colour with (R, G, B, A) = (46, 139, 87, 255).
    #[inline]
    pub fn sea_green() -> Colour4 {
        Colour4::from_rgba8(46, 139, 87, 255)
    }

    /// The colour with (R, G, B, A) = (255, 245, 238, 255).
    #[inline]
    pub fn sea_shell() -> Colour4 {
        Colour4::from_rgba8(255, 245, 238, 255)
    }

    /// The colour with (R, G, B, A) = (160, 82, 45, 255).
    #[inline]
    pub fn sienna() -> Colour4 {
        Colour4::from_rgba8(160, 82, 45, 255)
    }

    /// The colour with (R, G, B, A) = (192, 192, 192, 255).
    #[inline]
    pub fn silver() -> Colour4 {
        Colour4::from_rgba8(192, 192, 192, 255)
    }

    /// The colour with (R, G, B, A) = (135, 206, 235, 255).
    #[inline]
    pub fn sky_blue() -> Colour4 {
        Colour4::from_rgba8(135, 206, 235, 255)
    }

    /// The colour with (R, G, B, A) = (106, 90, 205, 255).
    #[inline]
    pub fn slate_blue() -> Colour4 {
        Colour4::from_rgba8(106, 90, 205, 255)
    }

    /// The colour with (R, G, B, A) = (112, 128, 144, 255).
    #[inline]
    pub fn slate_gray() -> Colour4 {
        Colour4::from_rgba8(112, 128, 144, 255)
    }

    /// The colour with (R, G, B, A) = (255, 250, 250, 255).
    #[inline]
    pub fn snow() -> Colour4 {
        Colour4::from_rgba8(255, 250, 250, 255)
    }

    /// The colour with (R, G, B, A) = (0, 255, 127, 255).
    #[inline]
    pub fn spring_green() -> Colour4 {
        Colour4::from_rgba8(0, 255, 127, 255)
    }

    /// The colour with (R, G, B, A) = (70, 130, 180, 255).
    #[inline]
    pub fn steel_blue() -> Colour4 {
        Colour4::from_rgba8(70, 130, 180, 255)
    }

    /// The colour with (R, G, B, A) = (210, 180, 140, 255).
    #[inline]
    pub fn tan() -> Colour4 {
        Colour4::from_rgba8(210, 180, 140, 255)
    }

    /// The colour with (R, G, B, A) = (0, 128, 128, 255).
    #[inline]
    pub fn teal() -> Colour4 {
        Colour4::from_rgba8(0, 128, 128, 255)
    }

    /// The colour with (R, G, B, A) = (216, 191, 216, 255).
    #[inline]
    pub fn thistle() -> Colour4 {
        Colour4::from_rgba8(216, 191, 216, 255)
    }

    /// The colour with (R, G, B, A) = (255, 99, 71, 255).
    #[inline]
    pub fn tomato() -> Colour4 {
        Colour4::from_rgba8(255, 99, 71, 255)
    }

    /// The colour with (R, G, B, A) = (64, 224, 208, 255).
    #[inline]
    pub fn turquoise() -> Colour4 {
        Colour4::from_rgba8(64, 224, 208, 255)
    }

    /// The colour with (R, G, B, A) = (238, 130, 238, 255).
    #[inline]
    pub fn violet() -> Colour4 {
        Colour4::from_rgba8(238, 130, 238, 255)
    }

    /// The colour with (R, G, B, A) = (245, 222, 179, 255).
    #[inline]
    pub fn wheat() -> Colour4 {
        Colour4::from_rgba8(245, 222, 179, 255)
    }

    /// The colour with (R, G, B, A) = (255, 255, 255, 255).
    #[inline]
    pub fn white() -> Colour4 {
        Colour4::from_rgba8(255, 255, 255, 255)
    }

    /// The colour with (R, G, B, A) = (245, 245, 245, 255).
    #[inline]
    pub fn white_smoke() -> Colour4 {
        Colour4::from_rgba8(245, 245, 245, 255)
    }

    /// The colour with (R, G, B, A) = (255, 255, 0, 255).
    #[inline]
    pub fn yellow() -> Colour4 {
        Colour4::from_rgba8(255, 255, 0, 255)
    }

    /// The colour with (R, G, B, A) = (154, 205, 50, 255).
    #[inline]
    pub fn yellow_green() -> Colour4 {
        Colour4::from_rgba8(154, 205, 50, 255)
    }
}
