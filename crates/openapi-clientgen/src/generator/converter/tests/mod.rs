mod classes;
mod cycles;
mod enums;
mod support;
