//! The production configuration of the lomenu extension.

use super::assets;
use super::{
    BaseVersion, ExtensionConfig, ExtensionIdentity, IconSet, Language, UIButtonSpec,
    DEFAULT_ICON_FOLDER, DEFAULT_MENU_CONTEXT,
};

pub const EXTENSION_NAME: &str = "lomenu";
pub const EXTENSION_AUTHOR: &str = "torrua";
pub const EXTENSION_VERSION: BaseVersion = BaseVersion::new(0, 0, 1);

pub const BTN_INSERT_ACCENT: &str = "BTN_INSERT_ACCENT";
pub const BTN_DOTTED_UNDERLINE: &str = "BTN_DOTTED_UNDERLINE";
pub const BTN_SET_FONTS: &str = "BTN_SET_FONTS";
pub const BTN_COLOR_DIGITS: &str = "BTN_COLOR_DIGITS";
pub const BTN_CHECK_PAIRS: &str = "BTN_CHECK_PAIRS";
pub const BTN_SWITCH_TOOLBAR: &str = "BTN_SWITCH_TOOLBAR";
pub const BTN_CONFIGURE: &str = "BTN_CONFIGURE";

// (key, english, russian, on toolbar); order defines the menu order
const BUTTONS: [(&str, &str, &str, bool); 7] = [
    (BTN_INSERT_ACCENT, "Insert Accent", "Вставить ударение", true),
    (BTN_DOTTED_UNDERLINE, "Dotted Underline", "Подчеркнуть пунктиром", true),
    (BTN_SET_FONTS, "Set Fonts", "Задать шрифты", true),
    (BTN_COLOR_DIGITS, "Color digits", "Покрасить цифры", true),
    (BTN_CHECK_PAIRS, "Check paired symbols", "Проверить парные символы", true),
    (BTN_SWITCH_TOOLBAR, "Show/Hide Buttons", "Показать/скрыть кнопки", false),
    (BTN_CONFIGURE, "Configure", "Применить настройки", false),
];

impl ExtensionConfig {
    /// Configuration of the shipped lomenu extension.
    pub fn lomenu() -> Self {
        let identity = ExtensionIdentity::new(EXTENSION_NAME, EXTENSION_AUTHOR, EXTENSION_VERSION);
        let english = Language::english();
        let russian = Language::russian();

        let buttons = BUTTONS
            .iter()
            .map(|&(key, en, ru, on_toolbar)| {
                let button = UIButtonSpec::new(key)
                    .with_label(&english.code, en)
                    .with_label(&russian.code, ru);
                if on_toolbar { button } else { button.menu_only() }
            })
            .collect();

        let icons = IconSet::new()
            .with(identity.logo_icon.clone(), assets::LOGO)
            .with(format!("{BTN_COLOR_DIGITS}.png"), assets::COLOR_DIGITS)
            .with(format!("{BTN_CONFIGURE}.png"), assets::CONFIGURE)
            .with(format!("{BTN_DOTTED_UNDERLINE}.png"), assets::DOTTED_UNDERLINE)
            .with(format!("{BTN_SET_FONTS}.png"), assets::SET_FONTS)
            .with(format!("{BTN_INSERT_ACCENT}.png"), assets::INSERT_ACCENT)
            .with(format!("{BTN_SWITCH_TOOLBAR}.png"), assets::SWITCH_TOOLBAR)
            .with(format!("{BTN_CHECK_PAIRS}.png"), assets::CHECK_PAIRS);

        Self {
            identity,
            languages: vec![english, russian],
            buttons,
            icons,
            icon_folder: DEFAULT_ICON_FOLDER.to_string(),
            menu_context: DEFAULT_MENU_CONTEXT.to_string(),
        }
    }
}
