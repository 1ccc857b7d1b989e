//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting, toasts,
//! navigation) and delegates card rendering to `components`. Event handlers
//! reach the gateway and router through [`PageHandles`], which is `Copy` so
//! any closure can capture it.

pub mod admin_panel;
pub mod dashboard;
pub mod login;
pub mod project_detail;
pub mod signup;

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use projectflow::notice::{Notice, Operation};
use projectflow::{ApiError, AppRoute};

use crate::state::session::{ClientGateway, use_gateway};
use crate::state::toast::{ToastState, notify, report};

type Navigate = Rc<dyn Fn(&str, NavigateOptions)>;

/// Gateway, router and toast queue for one mounted page.
#[derive(Clone, Copy)]
pub(crate) struct PageHandles {
    gateway: StoredValue<ClientGateway, LocalStorage>,
    navigate: StoredValue<Navigate, LocalStorage>,
    pub toasts: RwSignal<ToastState>,
}

impl PageHandles {
    /// Must be called during component setup.
    pub fn new() -> Self {
        let navigate: Navigate = Rc::new(use_navigate());
        Self {
            gateway: StoredValue::new_local(use_gateway()),
            navigate: StoredValue::new_local(navigate),
            toasts: expect_context::<RwSignal<ToastState>>(),
        }
    }

    pub fn gateway(self) -> ClientGateway {
        self.gateway.get_value()
    }

    /// Navigate to `route`; a no-op once the page has been unmounted.
    pub fn go(self, route: &AppRoute) {
        let path = route.path();
        self.navigate.try_with_value(|navigate| navigate(&path, NavigateOptions::default()));
    }

    pub fn notify(self, notice: Notice) {
        notify(self.toasts, notice);
    }

    pub fn report<T>(self, operation: Operation, result: &Result<T, ApiError>) {
        report(self.toasts, operation, result);
    }

    /// Toast a finished operation and hand back its value on success.
    pub fn finish<T>(self, operation: Operation, result: Result<T, ApiError>) -> Option<T> {
        match result {
            Ok(value) => {
                if let Some(message) = operation.success_message() {
                    self.notify(Notice::success(message));
                }
                Some(value)
            }
            Err(e) => {
                self.fail(operation, &e);
                None
            }
        }
    }

    /// Toast a failed operation; when the session is gone, go to login.
    pub fn fail(self, operation: Operation, error: &ApiError) {
        self.notify(Notice::from_error(operation, error));
        if error.requires_login() {
            self.go(&AppRoute::Login);
        }
    }
}
