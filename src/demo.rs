//! Walks each container through a scripted scenario and records what
//! happened, step by step.

use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use tracing::info;

use crate::config::DemoConfig;
use crate::{BinarySearchTree, BoundedStack, Queue, SinglyLinkedList};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub operation: String,
    pub outcome: String,
    /// `false` for rejected pushes, empty reads and failed deletes.
    pub ok: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub structure: String,
    pub steps: Vec<Step>,
}

impl Section {
    fn new(structure: &str) -> Self {
        Section {
            structure: structure.to_string(),
            steps: Vec::new(),
        }
    }

    fn record(&mut self, operation: impl Into<String>, outcome: impl Into<String>, ok: bool) {
        self.steps.push(Step {
            operation: operation.into(),
            outcome: outcome.into(),
            ok,
        });
    }

    fn record_read<T: Display>(&mut self, operation: impl Into<String>, value: Option<T>) {
        match value {
            Some(value) => self.record(operation, value.to_string(), true),
            None => self.record(operation, "none", false),
        }
    }

    pub fn outcomes(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.outcome.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub sections: Vec<Section>,
}

impl DemoReport {
    pub fn section(&self, structure: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.structure == structure)
    }
}

fn bracketed<T: Display>(mut items: impl Iterator<Item = T>) -> String {
    format!("[{}]", items.join(", "))
}

pub fn run(config: &DemoConfig) -> DemoReport {
    DemoReport {
        sections: vec![
            run_stack(config),
            run_queue(config),
            run_list(config),
            run_bst(config),
        ],
    }
}

pub fn run_stack(config: &DemoConfig) -> Section {
    info!(capacity = config.stack_capacity, "running stack scenario");
    let mut section = Section::new("stack");
    let mut stack = BoundedStack::new(config.stack_capacity);

    for &item in &config.stack_items {
        if stack.push(item) {
            section.record(format!("push({item})"), "accepted", true);
        } else {
            section.record(format!("push({item})"), "rejected: stack full", false);
        }
    }
    section.record_read("peek()", stack.peek());

    loop {
        let popped = stack.pop();
        let done = popped.is_none();
        section.record_read("pop()", popped);
        if done {
            break;
        }
    }
    section
}

pub fn run_queue(config: &DemoConfig) -> Section {
    info!(items = config.queue_items.len(), "running queue scenario");
    let mut section = Section::new("queue");
    let mut queue = Queue::with_capacity(config.queue_items.len());

    for item in &config.queue_items {
        queue.enqueue(item.clone());
        section.record(format!("enqueue({item:?})"), format!("size {}", queue.size()), true);
    }
    section.record_read("peek()", queue.peek());

    loop {
        let front = queue.dequeue();
        let done = front.is_none();
        section.record_read("dequeue()", front);
        if done {
            break;
        }
    }
    section
}

pub fn run_list(config: &DemoConfig) -> Section {
    info!(items = config.list_items.len(), "running linked list scenario");
    let mut section = Section::new("linked_list");
    let mut list = SinglyLinkedList::new();

    for &item in &config.list_items {
        list.append(item);
        section.record(format!("append({item})"), bracketed(list.traverse()), true);
    }
    if let Some(item) = config.list_prepend {
        list.prepend(item);
        section.record(format!("prepend({item})"), bracketed(list.traverse()), true);
    }
    for key in &config.list_delete {
        if list.delete(key) {
            section.record(format!("delete({key})"), bracketed(list.traverse()), true);
        } else {
            section.record(format!("delete({key})"), "not found", false);
        }
    }
    section.record("traverse()", bracketed(list.traverse()), true);
    section
}

pub fn run_bst(config: &DemoConfig) -> Section {
    info!(keys = config.bst_keys.len(), "running binary search tree scenario");
    let mut section = Section::new("bst");
    let mut tree = BinarySearchTree::new();

    for &key in &config.bst_keys {
        match tree.insert(key, key.to_string()) {
            None => section.record(format!("insert({key})"), "inserted", true),
            Some(_) => section.record(format!("insert({key})"), "updated", true),
        }
    }
    section.record("traverse_in_order()", bracketed(tree.keys()), true);

    for key in &config.bst_delete {
        if tree.delete(key) {
            section.record(format!("delete({key})"), bracketed(tree.keys()), true);
        } else {
            section.record(format!("delete({key})"), "not found", false);
        }
        section.record_read(format!("search({key})"), tree.search(key));
    }
    section.record("height()", tree.height().to_string(), true);
    section
}
