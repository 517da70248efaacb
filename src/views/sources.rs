//! Page sources and detail resolvers backing each list screen.

use crate::api::SalonApi;
use crate::api::transport::Transport;
use crate::errors::AppResult;
use crate::models::appointment::{Appointment, ClientInfo, EmployeeSummary};
use crate::models::employee::Employee;
use crate::models::page::Page;
use crate::models::product::Product;
use crate::views::list::{DetailResolver, PageSource};

/// Which listing a source serves. The name keys the saved cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    AdminEmployees,
    AdminProducts,
    AdminAppointments,
    ClientProducts,
    ClientTeam,
    ClientHistory,
}

impl ListView {
    pub fn key(&self) -> &'static str {
        match self {
            ListView::AdminEmployees => "admin.employees",
            ListView::AdminProducts => "admin.products",
            ListView::AdminAppointments => "admin.appointments",
            ListView::ClientProducts => "client.products",
            ListView::ClientTeam => "client.team",
            ListView::ClientHistory => "client.history",
        }
    }

    /// Message shown when a page comes back empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ListView::AdminEmployees => "No employees found.",
            ListView::AdminProducts | ListView::ClientProducts => "No products found.",
            ListView::AdminAppointments => "No appointments found.",
            ListView::ClientTeam => "No team members found.",
            ListView::ClientHistory => "You have no appointments in your history.",
        }
    }

    /// Message shown when a page cannot be fetched.
    pub fn fetch_error_message(&self) -> Option<&'static str> {
        match self {
            ListView::ClientHistory => Some("An error occurred while fetching appointments."),
            _ => None,
        }
    }
}

pub struct AdminEmployees<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> PageSource for AdminEmployees<'_, T> {
    type Item = Employee;

    fn fetch(&self, page: u32) -> AppResult<Page<Employee>> {
        self.api.get_all_employees(page)
    }
}

pub struct AdminProducts<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> PageSource for AdminProducts<'_, T> {
    type Item = Product;

    fn fetch(&self, page: u32) -> AppResult<Page<Product>> {
        self.api.get_admin_products(page)
    }
}

pub struct AdminAppointments<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> PageSource for AdminAppointments<'_, T> {
    type Item = Appointment;

    fn fetch(&self, page: u32) -> AppResult<Page<Appointment>> {
        self.api.get_all_appointments(page)
    }
}

pub struct ClientProducts<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> PageSource for ClientProducts<'_, T> {
    type Item = Product;

    fn fetch(&self, page: u32) -> AppResult<Page<Product>> {
        self.api.load_products(page)
    }
}

pub struct ClientTeam<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> PageSource for ClientTeam<'_, T> {
    type Item = EmployeeSummary;

    fn fetch(&self, page: u32) -> AppResult<Page<EmployeeSummary>> {
        self.api.get_team(page)
    }
}

pub struct ClientHistory<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
    pub client_id: String,
}

impl<T: Transport> PageSource for ClientHistory<'_, T> {
    type Item = Appointment;

    fn fetch(&self, page: u32) -> AppResult<Page<Appointment>> {
        self.api.get_appointment_history(&self.client_id, page)
    }
}

/// Client and employee behind an appointment. A side that could not be
/// fetched stays `None` and renders as "Unknown ...".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentParties {
    pub client: Option<ClientInfo>,
    pub employee: Option<EmployeeSummary>,
}

pub struct AdminAppointmentParties<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> DetailResolver<Appointment> for AdminAppointmentParties<'_, T> {
    type Detail = AppointmentParties;

    fn resolve(&self, item: &Appointment) -> AppResult<AppointmentParties> {
        Ok(AppointmentParties {
            client: self.api.get_client_info(&item.client_id).ok(),
            employee: self.api.get_employee_info(&item.employee_id).ok(),
        })
    }
}

/// Employee who served a past or upcoming appointment (history screen).
pub struct HistoryEmployee<'a, T: Transport> {
    pub api: &'a SalonApi<T>,
}

impl<T: Transport> DetailResolver<Appointment> for HistoryEmployee<'_, T> {
    type Detail = EmployeeSummary;

    fn resolve(&self, item: &Appointment) -> AppResult<EmployeeSummary> {
        self.api.get_employee(&item.employee_id)
    }
}
