pub(crate) mod icon_button;
pub(crate) mod menu_row;
