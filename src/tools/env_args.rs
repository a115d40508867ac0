#[cfg(test)]
use std::cell::RefCell;
#[cfg(not(test))]
use std::env;
use std::str::FromStr;

/// Value of an arg passed to the app as `--name=value`.
/// The first occurrence wins. `--name=` gives an empty value.
///
/// Args are read from the process, which makes callers hard to test:
/// wrap tests with `with_env_args(args, fn)` to provide them.
pub fn retrieve_arg_value(arg_name: &str) -> Option<String> {
    get_env_args().iter().find_map(|arg| {
        arg.strip_prefix(arg_name)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::to_owned)
    })
}

/// Same as [retrieve_arg_value], parsed.
/// A value which can't be parsed is treated as missing.
pub fn retrieve_parsed_arg_value<T: FromStr>(arg_name: &str) -> Option<T> {
    retrieve_arg_value(arg_name).and_then(|value| value.parse::<T>().ok())
}

#[cfg(not(test))]
fn get_env_args() -> Vec<String> {
    env::args().collect()
}

#[cfg(test)]
thread_local! {
    /// Args seen by the current test thread, set by `with_env_args`.
    static ENV_ARGS: RefCell<Vec<String>> = const { RefCell::new(vec![]) };
}

#[cfg(test)]
fn get_env_args() -> Vec<String> {
    ENV_ARGS.with(|args| args.borrow().clone())
}

/// Run `function` as if the app had been launched with `args`.
/// Previous args are restored afterward.
#[cfg(test)]
pub fn with_env_args<F, T>(args: Vec<String>, function: F) -> T
where
    F: FnOnce() -> T,
{
    let previous_args = ENV_ARGS.with(|refcell| refcell.replace(args));
    let result = function();
    ENV_ARGS.with(|refcell| refcell.replace(previous_args));
    result
}

#[cfg(test)]
pub mod tests {
    use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value, with_env_args};
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        args = {
            vec!["--members-file=members.json"],
            vec!["--event-log=events.txt", "--members-file=other.json"],
            vec!["--members-file-old=wrong"],
            vec!["--members-file="],
            vec!["--another-arg=wrong"],
        },
        expected_result = {
            Some("members.json".to_owned()),
            Some("other.json".to_owned()),
            None,
            Some(String::new()),
            None,
        }
    )]
    fn should_retrieve_arg_value(args: Vec<&str>, expected_result: Option<String>) {
        let args = args.into_iter().map(str::to_owned).collect();

        let result = with_env_args(args, || retrieve_arg_value("--members-file"));

        assert_eq!(expected_result, result);
    }

    #[parameterized(
        args = {vec!["--page-size=10".to_owned()], vec!["--page-size=ten".to_owned()], vec!["--page-size=".to_owned()], vec![]},
        expected_result = {Some(10), None, None, None}
    )]
    fn should_retrieve_parsed_arg_value(args: Vec<String>, expected_result: Option<usize>) {
        let result = with_env_args(args, || retrieve_parsed_arg_value("--page-size"));
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_restore_previous_args() {
        with_env_args(vec!["--port=1".to_owned()], || {
            with_env_args(vec!["--port=2".to_owned()], || ());
            assert_eq!(Some("1".to_owned()), retrieve_arg_value("--port"));
        });
    }
}
