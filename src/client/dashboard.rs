//! # Dashboard
//!
//! Client-side state and the user flows that drive the API.
//!
//! The cache is replaced wholesale after every load and every successful
//! mutation. Nothing is patched locally. Requests are not debounced: two
//! saves issued back to back both reach the server.

use std::time::Instant;

use crate::records::Student;

use super::api::ApiClient;
use super::form::{FormMode, StudentForm};
use super::notification::Notification;
use super::render::{render_notification, render_summary, render_table, LOADING_MESSAGE};
use super::summary::{filter_students, Summary};

/// Receives progress messages such as the loading indicator
pub type ProgressHook = Box<dyn Fn(&str) + Send + Sync>;

/// Client state for the student table
pub struct Dashboard {
    api: ApiClient,
    students: Vec<Student>,
    loading: bool,
    progress: Option<ProgressHook>,
    mode: FormMode,
    form: Option<StudentForm>,
    pending_delete: Option<u64>,
    notification: Option<Notification>,
}

impl Dashboard {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            students: Vec::new(),
            loading: false,
            progress: None,
            mode: FormMode::default(),
            form: None,
            pending_delete: None,
            notification: None,
        }
    }

    /// Report progress through `hook`. The loading indicator is sent
    /// before every fetch of the list.
    pub fn with_progress<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(hook));
        self
    }

    /// Initial load
    pub async fn start(&mut self) {
        tracing::debug!(api = self.api.base_url(), "starting dashboard");
        self.load_students().await;
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Cached records in server order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The open form, if any
    pub fn form(&self) -> Option<&StudentForm> {
        self.form.as_ref()
    }

    pub fn pending_delete(&self) -> Option<u64> {
        self.pending_delete
    }

    /// Latest notification, regardless of age
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Latest notification if it has not expired at `now`
    pub fn visible_notification(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_visible_at(now))
    }

    fn notify(&mut self, notification: Notification) {
        if notification.is_error() {
            tracing::warn!(message = %notification.message, "client error");
        }
        self.notification = Some(notification);
    }

    /// Replace the cache with the server's list.
    ///
    /// On failure the cache is cleared and an error notification is shown,
    /// so the table never shows stale rows.
    pub async fn load_students(&mut self) {
        self.loading = true;
        if let Some(progress) = &self.progress {
            progress(LOADING_MESSAGE);
        }
        match self.api.list().await {
            Ok(students) => {
                tracing::debug!(count = students.len(), "loaded students");
                self.students = students;
            }
            Err(e) => {
                self.notify(Notification::error(format!("Error loading students: {}", e)));
                self.students.clear();
            }
        }
        self.loading = false;
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.students)
    }

    /// Cached records matching the search query
    pub fn search(&self, query: &str) -> Vec<Student> {
        filter_students(&self.students, query)
    }

    /// Render summary, table and any visible notification
    pub fn render(&self, query: Option<&str>) -> String {
        let rows = match query {
            Some(q) => self.search(q),
            None => self.students.clone(),
        };

        let mut out = String::new();
        if let Some(note) = self.visible_notification(Instant::now()) {
            out.push_str(&render_notification(note));
            out.push('\n');
        }
        out.push_str(&render_summary(&self.summary()));
        out.push_str("\n\n");
        out.push_str(&render_table(&rows));
        out
    }

    // ==================
    // Add / Edit
    // ==================

    /// Open a blank form in create mode
    pub fn open_add(&mut self) {
        self.mode = FormMode::Create;
        self.form = Some(StudentForm::blank());
    }

    /// Open the form prefilled from the cached record with `id`.
    ///
    /// Returns false and leaves the form closed when the id is not cached.
    pub fn open_edit(&mut self, id: u64) -> bool {
        let Some(student) = self.students.iter().find(|s| s.id == id) else {
            return false;
        };
        self.form = Some(StudentForm::from_student(student));
        self.mode = FormMode::Edit(id);
        true
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Edit the open form's inputs
    pub fn form_mut(&mut self) -> Option<&mut StudentForm> {
        self.form.as_mut()
    }

    /// Validate the open form and create or update according to the mode.
    ///
    /// Returns true when the server accepted the record. Invalid input is
    /// reported without contacting the server.
    pub async fn save(&mut self) -> bool {
        let form = self.form.clone().unwrap_or_default();
        let fields = match form.validate() {
            Ok(fields) => fields,
            Err(message) => {
                self.notify(Notification::error(message));
                return false;
            }
        };

        tracing::debug!(editing = self.mode.is_editing(), "saving student");
        let result = match self.mode {
            FormMode::Create => self.api.create(&fields).await,
            FormMode::Edit(id) => self.api.update(id, &fields).await,
        };

        match result {
            Ok(_) => {
                self.notify(Notification::success("Student saved successfully!"));
                self.load_students().await;
                self.close_form();
                true
            }
            Err(e) => {
                self.notify(Notification::error(format!("Error: {}", e)));
                false
            }
        }
    }

    // ==================
    // Delete
    // ==================

    /// Mark `id` for deletion and return the confirmation prompt
    pub fn open_confirm_delete(&mut self, id: u64) -> String {
        self.pending_delete = Some(id);
        match self.students.iter().find(|s| s.id == id) {
            Some(student) => format!(
                "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                student.name
            ),
            None => "Are you sure you want to delete this student? This action cannot be undone."
                .to_string(),
        }
    }

    /// Drop the pending deletion without contacting the server
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending record, then reload.
    ///
    /// On failure the pending id is kept so the user can retry or cancel.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(id) = self.pending_delete else {
            self.notify(Notification::error("Error: No student selected"));
            return false;
        };

        match self.api.delete(id).await {
            Ok(response) => {
                self.notify(Notification::success(response.message));
                self.load_students().await;
                self.cancel_delete();
                true
            }
            Err(e) => {
                self.notify(Notification::error(format!("Error: {}", e)));
                false
            }
        }
    }
}
