use std::fmt::Debug;

pub mod debounce;
pub mod env_args;

/// Lower-case a text and strip its diacritics, so that "MÉXICO" and "mexico" compare equal.
pub fn normalize(text: &str) -> String {
    diacritics::remove_diacritics(&text.to_lowercase())
}

pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
