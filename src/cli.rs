use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "users")]
#[command(about = "A CLI for managing users over a REST API", version)]
#[command(after_help = "EXAMPLES:
    users list                        List all users
    users show 3                      Show one user
    users add -n \"Ada\" -e a@b.co -a 36   Create a user
    users update 3 --age 37           Update a user (blank fields keep their values)
    users delete 3 --yes              Delete without prompting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Show debug logging and full error chains
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all users
    #[command(after_help = "EXAMPLES:
    users list
    users list --json")]
    List,
    /// Show a single user
    #[command(after_help = "EXAMPLES:
    users show 3")]
    Show {
        /// Server-assigned user id
        id: i64,
    },
    /// Create a new user
    #[command(after_help = "EXAMPLES:
    users add --name \"Ada Lovelace\" --email ada@example.com --age 36")]
    Add(UserAddArgs),
    /// Update an existing user (omitted fields keep their current values)
    #[command(after_help = "EXAMPLES:
    users update 3 --age 37
    users update 3 --name \"New Name\" --email new@example.com")]
    Update(UserUpdateArgs),
    /// Delete a user
    #[command(after_help = "EXAMPLES:
    users delete 3
    users delete 3 --yes")]
    Delete(UserDeleteArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    users completions bash > ~/.bash_completion.d/users
    users completions zsh > ~/.zfunc/_users
    users completions fish > ~/.config/fish/completions/users.fish")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    #[command(after_help = "EXAMPLES:
    users init")]
    Init,
}

#[derive(Args)]
pub struct UserAddArgs {
    /// Full name
    #[arg(long, short)]
    pub name: String,

    /// Email address
    #[arg(long, short)]
    pub email: String,

    /// Age in years (must be above 18)
    #[arg(long, short)]
    pub age: String,
}

#[derive(Args)]
pub struct UserUpdateArgs {
    /// Server-assigned user id
    pub id: i64,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New age in years (must be above 18)
    #[arg(long)]
    pub age: Option<String>,
}

#[derive(Args)]
pub struct UserDeleteArgs {
    /// Server-assigned user id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}
