pub(crate) mod toolbar;
