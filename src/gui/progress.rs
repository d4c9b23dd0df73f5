// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap() = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg.to_string());
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        if self.total == 0 {
            self.set_status(format!("Fetched {label}"));
        } else {
            self.set_status(format!("Fetched {label} ({}/{})", self.done, self.total));
        }
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Fetch complete");
        } else {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
