//! Section switches of the three dashboards.
//!
//! Each dashboard shows exactly one section at a time; `toggle` replaces
//! the visible one.

use crate::session::Route;
use std::fmt;

pub const SALON_NAME: &str = "Joki Hair Salon";

pub const ABOUT_US: &[&str] = &[
    "Joki Hair Salon is a top-tier salon and barbershop offering premium hair services along with a curated selection of hair care products. We pride ourselves on delivering a luxurious and personalized experience for every client.",
    "Our salon combines modern techniques with high-quality products to meet the styling needs of both men and women. Whether you're looking for a fresh haircut, a beard trim, or professional hair care advice, Joki Hair Salon is here to elevate your look.",
    "At Joki Hair Salon, our mission is to provide top-notch hair care while also offering a variety of hair products, all within an inviting and trendy environment. We strive to create lasting connections with our clients through excellent service and expertise.",
];

/// Common behaviour of a dashboard section enum.
pub trait Section: Copy + PartialEq + fmt::Display + 'static {
    const ALL: &'static [Self];
    const DEFAULT: Self;

    /// Find a section by its display name, ignoring case.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.to_string().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginCard {
    Login,
    Signup,
    AboutUs,
    Restore,
}

impl Section for LoginCard {
    const ALL: &'static [Self] = &[
        LoginCard::Login,
        LoginCard::Signup,
        LoginCard::AboutUs,
        LoginCard::Restore,
    ];
    const DEFAULT: Self = LoginCard::Login;
}

impl fmt::Display for LoginCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoginCard::Login => "Login",
            LoginCard::Signup => "Sign up",
            LoginCard::AboutUs => "About us",
            LoginCard::Restore => "Restore password",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Employees,
    Products,
    Appointments,
    Statistics,
}

impl Section for AdminSection {
    const ALL: &'static [Self] = &[
        AdminSection::Employees,
        AdminSection::Products,
        AdminSection::Appointments,
        AdminSection::Statistics,
    ];
    const DEFAULT: Self = AdminSection::Employees;
}

impl fmt::Display for AdminSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdminSection::Employees => "Employees",
            AdminSection::Products => "Products",
            AdminSection::Appointments => "Appointments",
            AdminSection::Statistics => "Statistics",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSection {
    Home,
    Appointment,
    History,
    Products,
    Team,
    Cart,
    Account,
}

impl Section for UserSection {
    const ALL: &'static [Self] = &[
        UserSection::Home,
        UserSection::Appointment,
        UserSection::History,
        UserSection::Products,
        UserSection::Team,
        UserSection::Cart,
        UserSection::Account,
    ];
    const DEFAULT: Self = UserSection::Home;
}

impl fmt::Display for UserSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UserSection::Home => "Home",
            UserSection::Appointment => "Appointment",
            UserSection::History => "History",
            UserSection::Products => "Products",
            UserSection::Team => "Team",
            UserSection::Cart => "Cart",
            UserSection::Account => "Account",
        })
    }
}

/// One dashboard: its route and the visible section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dashboard<S: Section> {
    pub route: Route,
    visible: S,
}

impl<S: Section> Dashboard<S> {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            visible: S::DEFAULT,
        }
    }

    pub fn visible(&self) -> S {
        self.visible
    }

    pub fn toggle(&mut self, section: S) {
        self.visible = section;
    }

    /// The "Logout" entry of every header.
    pub fn logout(&self) -> Route {
        Route::Login
    }

    /// Header line: salon name, then the sections with the visible one
    /// in brackets.
    pub fn header(&self) -> String {
        let nav = S::ALL
            .iter()
            .map(|s| {
                if *s == self.visible {
                    format!("[{}]", s)
                } else {
                    s.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        format!("{}  |  {}  Logout", SALON_NAME, nav)
    }
}
