use crate::session::Role;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for jokisalon
/// Terminal client for the Joki Hair Salon booking and shop API
#[derive(Parser)]
#[command(
    name = "jokisalon",
    version = env!("CARGO_PKG_VERSION"),
    about = "Joki Hair Salon from the terminal: book appointments, shop products and manage the salon",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL (e.g. http://localhost:8080)
    #[arg(global = true, long = "base-url")]
    pub base_url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the stored session identifiers
    Status,

    /// Navigate to a route (/, /login, /admin-dashboard, /user-dashboard)
    Open {
        /// Route path
        path: String,

        /// Section to show once the dashboard renders
        #[arg(long)]
        section: Option<String>,
    },

    /// Log in as admin or client
    Login {
        /// Account role (defaults to `default_role` from the config)
        #[arg(long, value_enum)]
        role: Option<Role>,

        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Create a client account and log in with it
    Signup {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Forget every stored session identifier
    Logout,

    /// Restore a client password: send a code, then set a new password
    Recover {
        #[arg(long)]
        email: String,

        /// Verification code received by email
        #[arg(long, requires = "new_password")]
        code: Option<String>,

        #[arg(long = "new-password", requires = "code")]
        new_password: Option<String>,
    },

    /// About the salon
    About,

    /// Admin dashboard
    Admin {
        #[command(subcommand)]
        section: AdminCommand,
    },

    /// Client dashboard
    Client {
        #[command(subcommand)]
        section: ClientCommand,
    },
}

/// Page selection shared by every `list` action.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, conflicts_with_all = ["next", "prev"])]
    pub page: Option<u32>,

    /// Go to the page after the last one shown
    #[arg(long, conflicts_with = "prev")]
    pub next: bool,

    /// Go to the page before the last one shown
    #[arg(long)]
    pub prev: bool,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Manage employees
    Employees {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Browse appointments
    Appointments {
        #[command(subcommand)]
        action: AppointmentAction,
    },

    /// Service demand report for a date range
    Stats {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct EmployeeArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Comma separated skills (codes or labels, e.g. "haircut,Blow Dry")
    #[arg(long)]
    pub skills: Option<String>,
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// List employees
    List(PageArgs),

    /// Show the N-th employee of the current page
    Show { index: usize },

    /// Create an employee
    Add {
        #[command(flatten)]
        fields: EmployeeArgs,

        /// Working hours, repeatable: MONDAY=09:00-17:00
        #[arg(long = "schedule")]
        schedule: Vec<String>,

        /// Hire date (YYYY-MM-DD, default today)
        #[arg(long = "hire-date")]
        hire_date: Option<String>,
    },

    /// Update the N-th employee of the current page
    Update {
        index: usize,

        #[command(flatten)]
        fields: EmployeeArgs,
    },

    /// Delete the N-th employee of the current page
    Delete { index: usize },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub price: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub stock: Option<i64>,

    /// Comma separated categories (codes or labels)
    #[arg(long)]
    pub categories: Option<String>,

    #[arg(long)]
    pub brand: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand)]
pub enum ProductAction {
    /// List products
    List(PageArgs),

    /// Show the N-th product of the current page
    Show { index: usize },

    /// Create a product
    Add(ProductArgs),

    /// Update the N-th product of the current page
    Update {
        index: usize,

        #[command(flatten)]
        fields: ProductArgs,
    },

    /// Delete the N-th product of the current page
    Delete { index: usize },
}

#[derive(Subcommand)]
pub enum AppointmentAction {
    /// List appointments
    List(PageArgs),

    /// Show the N-th appointment of the current page with client and employee
    Show { index: usize },
}

#[derive(Subcommand)]
pub enum ClientCommand {
    /// Free slots for a date range and a set of services
    Hours {
        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Comma separated services
        #[arg(long)]
        services: Option<String>,
    },

    /// Book one of the free slots
    Book {
        /// Day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Hour as listed by `hours` (HH:MM)
        #[arg(long)]
        hour: Option<String>,

        /// Comma separated services
        #[arg(long)]
        services: Option<String>,
    },

    /// Your appointments
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Browse the shop
    Products {
        #[command(subcommand)]
        action: ShopAction,
    },

    /// Meet the team
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Show the shopping cart
    Cart {
        /// Remove a product (by name) before showing the cart
        #[arg(long)]
        remove: Option<String>,
    },

    /// Show or change the account
    Account {
        #[arg(long, conflicts_with = "delete")]
        update: bool,

        #[arg(long, requires = "update")]
        email: Option<String>,

        #[arg(long, requires = "update")]
        username: Option<String>,

        #[arg(long)]
        delete: bool,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List your appointments
    List(PageArgs),

    /// Show the N-th appointment of the current page
    Show { index: usize },

    /// Cancel the N-th (upcoming) appointment of the current page
    Cancel { index: usize },

    /// Review the N-th (past) appointment of the current page
    Review {
        index: usize,

        #[arg(long)]
        comment: String,

        #[arg(long)]
        rating: Option<u8>,
    },
}

#[derive(Subcommand)]
pub enum ShopAction {
    /// List products
    List(PageArgs),

    /// Show the N-th product of the current page
    Show { index: usize },

    /// Add the N-th product of the current page to the cart
    AddToCart {
        index: usize,

        #[arg(long = "qty", default_value_t = 1)]
        quantity: u32,
    },
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// List team members
    List(PageArgs),

    /// Show the N-th team member of the current page
    Show { index: usize },
}
