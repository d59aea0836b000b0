pub(crate) const MENU_TOGGLE: &[u8] = include_bytes!("../assets/svg/menu.svg");
pub(crate) const MENU_SETTINGS: &[u8] =
    include_bytes!("../assets/svg/gear.svg");
pub(crate) const MENU_ABOUT: &[u8] = include_bytes!("../assets/svg/info.svg");
