//! In-memory host adapter for tests.

use std::collections::HashMap;

use crate::error::HostError;
use crate::host::{Host, HostResult};
use crate::value::Value;

#[derive(Debug, Default)]
struct FakeWidget {
    kind: String,
    config: HashMap<String, Value>,
    callback: Value,
    callback_data: Value,
    /// Empty string for root-level widgets.
    parent: String,
    children: Vec<String>,
}

/// A complete in-memory [`Host`] implementation.
///
/// Models the pieces of a retained-mode host the binding layer depends on:
/// a widget store with ordered children, the implicit container stack, the
/// per-widget callback pair, and the named value store. Widget ids and value
/// store keys share one namespace, so id generation probes both.
#[derive(Debug, Default)]
pub struct FakeHost {
    widgets: HashMap<String, FakeWidget>,
    roots: Vec<String>,
    stack: Vec<String>,
    values: HashMap<String, Value>,
}

impl FakeHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live widgets.
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Root-level widgets in creation order.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// The id currently on top of the container stack, if any.
    pub fn current_container(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// The kind a widget was created as.
    pub fn widget_kind(&self, id: &str) -> Option<&str> {
        self.widgets.get(id).map(|w| w.kind.as_str())
    }

    /// Fire a widget's registered callback with its callback data, the way the
    /// host's event loop would between frames.
    pub fn invoke(&self, id: &str) -> HostResult<()> {
        let widget = self.widget(id, "invoke")?;
        if let Value::Callback(f) = &widget.callback {
            f(id, &widget.callback_data);
        }
        Ok(())
    }

    fn widget(&self, id: &str, op: &'static str) -> HostResult<&FakeWidget> {
        self.widgets
            .get(id)
            .ok_or_else(|| HostError::new(op, format!("no widget `{id}`")))
    }

    fn widget_mut(&mut self, id: &str, op: &'static str) -> HostResult<&mut FakeWidget> {
        self.widgets
            .get_mut(id)
            .ok_or_else(|| HostError::new(op, format!("no widget `{id}`")))
    }

    fn sibling_list(&mut self, parent: &str) -> &mut Vec<String> {
        if parent.is_empty() {
            &mut self.roots
        } else {
            // Caller has verified the parent exists.
            &mut self.widgets.get_mut(parent).expect("parent verified").children
        }
    }

    fn detach(&mut self, id: &str) {
        let parent = self.widgets.get(id).map(|w| w.parent.clone()).unwrap_or_default();
        self.sibling_list(&parent).retain(|child| child != id);
    }

    fn attach(
        &mut self,
        id: &str,
        parent: &str,
        before: &str,
        op: &'static str,
    ) -> HostResult<()> {
        let siblings = self.sibling_list(parent);
        if before.is_empty() {
            siblings.push(id.to_owned());
        } else {
            let pos = siblings.iter().position(|s| s == before).ok_or_else(|| {
                HostError::new(op, format!("`{before}` is not a child of `{parent}`"))
            })?;
            siblings.insert(pos, id.to_owned());
        }
        if let Some(widget) = self.widgets.get_mut(id) {
            widget.parent = parent.to_owned();
        }
        Ok(())
    }

    fn subtree(&self, id: &str) -> Vec<String> {
        let mut ids = vec![id.to_owned()];
        let mut i = 0;
        while i < ids.len() {
            if let Some(widget) = self.widgets.get(&ids[i]) {
                ids.extend(widget.children.iter().cloned());
            }
            i += 1;
        }
        ids
    }
}

impl Host for FakeHost {
    fn exists(&self, id: &str) -> bool {
        self.widgets.contains_key(id) || self.values.contains_key(id)
    }

    fn create_widget(&mut self, kind: &str, id: &str, config: &[(&str, Value)]) -> HostResult<()> {
        if self.exists(id) {
            return Err(HostError::new(
                "create_widget",
                format!("id `{id}` already exists"),
            ));
        }

        // Placement intent travels inside the config; a present `parent` key
        // marks a dependent kind even when its value is empty.
        let mut parent = None;
        let mut before = String::new();
        let mut stored = HashMap::new();
        let mut callback = Value::Null;
        let mut callback_data = Value::Null;
        for (name, value) in config {
            match *name {
                "parent" => parent = Some(value.as_str().unwrap_or_default().to_owned()),
                "before" => before = value.as_str().unwrap_or_default().to_owned(),
                "callback" => callback = value.clone(),
                "callback_data" => callback_data = value.clone(),
                _ => {
                    stored.insert((*name).to_owned(), value.clone());
                }
            }
        }

        let parent = match parent {
            // Root kinds carry no parent key at all.
            None => String::new(),
            Some(p) if p.is_empty() => match self.stack.last() {
                Some(top) => top.clone(),
                None => {
                    return Err(HostError::new(
                        "create_widget",
                        format!("`{id}` needs a parent and no container stack is open"),
                    ))
                }
            },
            Some(p) => {
                if !self.widgets.contains_key(&p) {
                    return Err(HostError::new(
                        "create_widget",
                        format!("parent `{p}` does not exist"),
                    ));
                }
                p
            }
        };

        self.widgets.insert(
            id.to_owned(),
            FakeWidget {
                kind: kind.to_owned(),
                config: stored,
                callback,
                callback_data,
                parent: String::new(),
                children: Vec::new(),
            },
        );
        if let Err(err) = self.attach(id, &parent, &before, "create_widget") {
            self.widgets.remove(id);
            return Err(err);
        }
        Ok(())
    }

    fn destroy_widget(&mut self, id: &str) -> HostResult<()> {
        self.widget(id, "destroy_widget")?;
        self.detach(id);
        for victim in self.subtree(id) {
            self.widgets.remove(&victim);
            self.stack.retain(|open| open != &victim);
        }
        Ok(())
    }

    fn config(&self, id: &str, attr: &str) -> HostResult<Value> {
        let widget = self.widget(id, "config")?;
        widget.config.get(attr).cloned().ok_or_else(|| {
            HostError::new("config", format!("widget `{id}` has no option `{attr}`"))
        })
    }

    fn set_config(&mut self, id: &str, attr: &str, value: &Value) -> HostResult<()> {
        let widget = self.widget_mut(id, "set_config")?;
        widget.config.insert(attr.to_owned(), value.clone());
        Ok(())
    }

    fn callback(&self, id: &str) -> HostResult<Value> {
        Ok(self.widget(id, "callback")?.callback.clone())
    }

    fn set_callback(&mut self, id: &str, callback: Value, data: Value) -> HostResult<()> {
        let widget = self.widget_mut(id, "set_callback")?;
        widget.callback = callback;
        widget.callback_data = data;
        Ok(())
    }

    fn callback_data(&self, id: &str) -> HostResult<Value> {
        Ok(self.widget(id, "callback_data")?.callback_data.clone())
    }

    fn set_callback_data(&mut self, id: &str, data: Value) -> HostResult<()> {
        self.widget_mut(id, "set_callback_data")?.callback_data = data;
        Ok(())
    }

    fn parent(&self, id: &str) -> HostResult<String> {
        Ok(self.widget(id, "parent")?.parent.clone())
    }

    fn children(&self, id: &str) -> HostResult<Vec<String>> {
        Ok(self.widget(id, "children")?.children.clone())
    }

    fn move_widget(&mut self, id: &str, new_parent: &str, before: &str) -> HostResult<()> {
        self.widget(id, "move_widget")?;
        if new_parent.is_empty() {
            return Err(HostError::new(
                "move_widget",
                format!("cannot move `{id}` to an empty parent"),
            ));
        }
        if !self.widgets.contains_key(new_parent) {
            return Err(HostError::new(
                "move_widget",
                format!("parent `{new_parent}` does not exist"),
            ));
        }
        if self.subtree(id).iter().any(|d| d == new_parent) {
            return Err(HostError::new(
                "move_widget",
                format!("`{new_parent}` is a descendant of `{id}`"),
            ));
        }
        self.detach(id);
        self.attach(id, new_parent, before, "move_widget")
    }

    fn move_up(&mut self, id: &str) -> HostResult<()> {
        let parent = self.widget(id, "move_up")?.parent.clone();
        let siblings = self.sibling_list(&parent);
        if let Some(pos) = siblings.iter().position(|s| s == id) {
            if pos > 0 {
                siblings.swap(pos, pos - 1);
            }
        }
        Ok(())
    }

    fn move_down(&mut self, id: &str) -> HostResult<()> {
        let parent = self.widget(id, "move_down")?.parent.clone();
        let siblings = self.sibling_list(&parent);
        if let Some(pos) = siblings.iter().position(|s| s == id) {
            if pos + 1 < siblings.len() {
                siblings.swap(pos, pos + 1);
            }
        }
        Ok(())
    }

    fn begin_container(&mut self, id: &str) -> HostResult<()> {
        self.widget(id, "begin_container")?;
        self.stack.push(id.to_owned());
        Ok(())
    }

    fn end_container(&mut self) -> HostResult<()> {
        self.stack
            .pop()
            .map(|_| ())
            .ok_or_else(|| HostError::new("end_container", "container stack is empty"))
    }

    fn set_value(&mut self, key: &str, value: &Value) -> HostResult<()> {
        self.values.insert(key.to_owned(), value.clone());
        Ok(())
    }

    fn value(&self, key: &str) -> HostResult<Value> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| HostError::new("value", format!("no value under `{key}`")))
    }
}
