pub(crate) mod date;
pub(crate) mod terminal;

pub(crate) use date::parse_date;
pub(crate) use terminal::open_in_terminal;
