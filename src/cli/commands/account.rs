use clap::{Arg, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help("Account email, compared case-insensitively")
        .env("PORDISTO_EMAIL")
        .required(true)
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .short('p')
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("PORDISTO_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create an account and sign in")
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long(ARG_NAME)
                .help("Display name")
                .env("PORDISTO_NAME")
                .required(true),
        )
        .arg(email_arg())
        .arg(password_arg())
        .arg(
            Arg::new(ARG_CONFIRM_PASSWORD)
                .short('c')
                .long(ARG_CONFIRM_PASSWORD)
                .help("Password confirmation, must match --password")
                .env("PORDISTO_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Sign in to an existing account")
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn logout() -> Command {
    Command::new(CMD_LOGOUT).about("Sign out of the current session")
}

#[must_use]
pub fn whoami() -> Command {
    Command::new(CMD_WHOAMI).about("Show the signed-in user")
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(register())
        .subcommand(login())
        .subcommand(logout())
        .subcommand(whoami())
}
