pub(crate) mod menu_item;
pub(crate) mod toolbar_button;
