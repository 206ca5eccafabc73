//! Context: the application-facing engine.
//!
//! A [`Context`] owns the host adapter, the node [`Registry`], and the
//! [`IdGenerator`] counters: explicit process-scoped state rather than
//! module-level globals, so independent trees can coexist in tests. All tree
//! mutation, attribute synchronization, and host calls go through it on one
//! logical thread.

use tracing::debug;

use crate::binding::schema::KindDef;
use crate::binding::store::ValueSlot;
use crate::binding::sync;
use crate::error::{Error, Result};
use crate::host::Host;
use crate::tree::idgen::IdGenerator;
use crate::tree::node::{Node, NodeRef};
use crate::tree::registry::Registry;
use crate::value::Value;

/// The attribute synchronization and tree-lifecycle engine.
pub struct Context<H: Host> {
    host: H,
    registry: Registry,
    idgen: IdGenerator,
}

impl<H: Host> Context<H> {
    /// Create an engine around a host adapter.
    pub fn new(host: H) -> Self {
        Self {
            host,
            registry: Registry::new(),
            idgen: IdGenerator::new(),
        }
    }

    /// Immutable access to the host adapter.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host adapter.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // -----------------------------------------------------------------------
    // Construction and materialization
    // -----------------------------------------------------------------------

    /// Construct a node of `kind` with a generated id.
    ///
    /// The node exists only in-process until [`Context::add`]; its attributes
    /// start from the kind's defaults. The generated id is free in both the
    /// host and the registry at the moment of return.
    pub fn create(&mut self, kind: &'static KindDef) -> Result<NodeRef> {
        let Self {
            host,
            registry,
            idgen,
        } = self;
        let id = idgen.generate(kind.name, |candidate| {
            host.exists(candidate) || registry.contains(candidate)
        });
        self.register(kind, id)
    }

    /// Construct a node of `kind` under an explicit id.
    ///
    /// Fails with [`Error::DuplicateId`] if the id is already registered.
    pub fn create_with_id(&mut self, kind: &'static KindDef, id: &str) -> Result<NodeRef> {
        self.register(kind, id.to_owned())
    }

    fn register(&mut self, kind: &'static KindDef, id: String) -> Result<NodeRef> {
        let node = Node::new(kind, id.clone());
        self.registry.insert(node)?;
        debug!(id = %id, kind = kind.name, "node registered");
        Ok(NodeRef(id))
    }

    /// Materialize a node: push its full cached attribute set to the host in
    /// one `create_widget` call.
    ///
    /// Container kinds then open the host's container stack; close it with
    /// [`Context::end`] once their children have been added.
    pub fn add(&mut self, id: &str) -> Result<()> {
        let Self { host, registry, .. } = self;
        let node = registry.get(id).ok_or_else(|| Error::invalid(id))?;
        let config = node.full_config();
        host.create_widget(node.kind().name, node.id(), &config)?;
        if node.kind().container {
            host.begin_container(node.id())?;
        }
        debug!(id = %id, kind = node.kind().name, "node materialized");
        Ok(())
    }

    /// Close the most recently opened container stack entry.
    pub fn end(&mut self) -> Result<()> {
        self.host.end_container()?;
        Ok(())
    }

    /// Whether the node currently has a live counterpart in the host.
    pub fn is_valid(&self, id: &str) -> bool {
        self.host.exists(id)
    }

    /// Whether a node is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    /// Immutable access to a registered node.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.registry.get(id)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Whether no nodes are registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // -----------------------------------------------------------------------
    // Attribute access
    // -----------------------------------------------------------------------

    /// Read an attribute through the binding layer.
    ///
    /// On a valid node the host is authoritative and the cache is refreshed;
    /// on an unmaterialized node the cached value is returned unmodified.
    pub fn get(&mut self, id: &str, attr: &str) -> Result<Value> {
        let Self { host, registry, .. } = self;
        let node = registry.get_mut(id).ok_or_else(|| Error::invalid(id))?;
        sync::read(&*host, node, attr)
    }

    /// Write an attribute through the binding layer.
    ///
    /// The cache is updated unconditionally; on a valid node the write goes
    /// through to the host immediately. Passing a [`NodeRef`] stores the
    /// referenced node's id.
    pub fn set(&mut self, id: &str, attr: &str, value: impl Into<Value>) -> Result<()> {
        let Self { host, registry, .. } = self;
        let node = registry.get_mut(id).ok_or_else(|| Error::invalid(id))?;
        sync::write(&mut *host, node, attr, value.into())
    }

    /// The node's display label (defaults to its id).
    pub fn label(&self, id: &str) -> Result<String> {
        self.registry
            .get(id)
            .map(|node| node.label().to_owned())
            .ok_or_else(|| Error::invalid(id))
    }

    // -----------------------------------------------------------------------
    // Tree relationships
    // -----------------------------------------------------------------------

    /// The node's parent id.
    ///
    /// On a valid node this always re-queries the host (the host is
    /// authoritative for placement) and refreshes the cached intent. On an
    /// unmaterialized node it returns the cached intent.
    pub fn parent(&mut self, id: &str) -> Result<String> {
        let Self { host, registry, .. } = self;
        let node = registry.get_mut(id).ok_or_else(|| Error::invalid(id))?;
        if host.exists(id) {
            let parent = host.parent(id)?;
            node.set_parent_intent(&parent);
            Ok(parent)
        } else {
            Ok(node.parent_intent().to_owned())
        }
    }

    /// The node's cached sibling intent.
    ///
    /// There is no authoritative read-back for sibling order: after
    /// materialization this may not reflect the host's actual ordering.
    pub fn before(&self, id: &str) -> Result<String> {
        self.registry
            .get(id)
            .map(|node| node.before_intent().to_owned())
            .ok_or_else(|| Error::invalid(id))
    }

    /// Move a node under `new_parent`, placed immediately before `before`
    /// (or appended when `before` is empty).
    ///
    /// The cached intent is always updated, so on an unmaterialized node the
    /// move applies automatically at materialization. On a valid node the
    /// host relocation happens immediately; an empty `new_parent` is an
    /// [`Error::InvalidReference`] there, since a live widget cannot be
    /// detached into "no parent".
    pub fn move_node(&mut self, id: &str, new_parent: &str, before: &str) -> Result<()> {
        let node = self.registry.get_mut(id).ok_or_else(|| Error::invalid(id))?;
        if !node.kind().dependent {
            return Err(Error::NotDependent {
                id: id.to_owned(),
                kind: node.kind().name,
            });
        }
        node.set_parent_intent(new_parent);
        node.set_before_intent(before);

        if self.host.exists(id) {
            if new_parent.is_empty() {
                return Err(Error::InvalidReference(format!("empty parent for `{id}`")));
            }
            self.host.move_widget(id, new_parent, before)?;
            debug!(id = %id, parent = new_parent, "node moved");
        }
        Ok(())
    }

    /// Reparent a node, appending it to the new parent's child order.
    pub fn set_parent(&mut self, id: &str, parent: &str) -> Result<()> {
        self.move_node(id, parent, "")
    }

    /// Reposition a node before a sibling within its current parent.
    pub fn set_before(&mut self, id: &str, before: &str) -> Result<()> {
        let parent = self.parent(id)?;
        self.move_node(id, &parent, before)
    }

    /// Reorder a node one position earlier among its siblings. No-op at the
    /// top; no-op on an unmaterialized node.
    pub fn move_up(&mut self, id: &str) -> Result<()> {
        self.reorder(id, H::move_up)
    }

    /// Reorder a node one position later among its siblings. No-op at the
    /// bottom; no-op on an unmaterialized node.
    pub fn move_down(&mut self, id: &str) -> Result<()> {
        self.reorder(id, H::move_down)
    }

    fn reorder(&mut self, id: &str, op: fn(&mut H, &str) -> crate::host::HostResult<()>) -> Result<()> {
        let node = self.registry.get(id).ok_or_else(|| Error::invalid(id))?;
        if !node.kind().dependent {
            return Err(Error::NotDependent {
                id: id.to_owned(),
                kind: node.kind().name,
            });
        }
        if self.host.exists(id) {
            op(&mut self.host, id)?;
        }
        Ok(())
    }

    /// The node's host-reported children, in sibling order. Empty for an
    /// unmaterialized node.
    pub fn children(&self, id: &str) -> Result<Vec<String>> {
        if !self.registry.contains(id) {
            return Err(Error::invalid(id));
        }
        if self.host.exists(id) {
            Ok(self.host.children(id)?)
        } else {
            Ok(Vec::new())
        }
    }

    // -----------------------------------------------------------------------
    // Deletion and refresh
    // -----------------------------------------------------------------------

    /// Delete a node, cascading through its host-reported children.
    ///
    /// Registered children go through this same protocol first; then the id
    /// leaves the registry and the host widget (with any remaining
    /// unregistered subtree) is destroyed. Deleting an unmaterialized node
    /// removes only the registry entry. Not transactional: if a host call
    /// fails mid-cascade, the remainder is left as the host reports it.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.registry.contains(id) {
            return Err(Error::invalid(id));
        }
        if self.host.exists(id) {
            for child in self.host.children(id)? {
                if self.registry.contains(&child) {
                    self.delete(&child)?;
                }
            }
        }
        self.registry.remove(id);
        if self.host.exists(id) {
            self.host.destroy_widget(id)?;
        }
        debug!(id = %id, "node deleted");
        Ok(())
    }

    /// Destroy and immediately re-materialize a valid node from its cache.
    ///
    /// Synchronized and special attributes are read back from the host first,
    /// so external changes survive the round trip. For dependent kinds the
    /// authoritative parent is read back too: a node originally placed through
    /// the container stack re-materializes under the same parent even though
    /// no stack is open. Host-side children are destroyed and not restored.
    /// For container kinds the stack opened by re-materialization is closed
    /// again before returning.
    pub fn refresh(&mut self, id: &str) -> Result<()> {
        if !self.host.exists(id) {
            return Err(Error::invalid(id));
        }
        let kind = {
            let Self { host, registry, .. } = self;
            let node = registry.get_mut(id).ok_or_else(|| Error::invalid(id))?;
            let kind = node.kind();
            for attr in kind.attrs() {
                sync::read(&*host, node, attr)?;
            }
            if kind.dependent {
                let parent = host.parent(id)?;
                node.set_parent_intent(&parent);
            }
            kind
        };
        self.host.destroy_widget(id)?;
        self.add(id)?;
        if kind.container {
            self.host.end_container()?;
        }
        debug!(id = %id, "node refreshed");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Value store
    // -----------------------------------------------------------------------

    /// Bind a slot in the host's named value store.
    ///
    /// With `key: None` a free key is generated from the `"ValueSlot"`
    /// counter, probing the host the same way node ids are generated.
    pub fn value_slot(&mut self, key: Option<&str>, initial: impl Into<Value>) -> Result<ValueSlot> {
        let Self { host, idgen, .. } = self;
        let key = match key {
            Some(k) => k.to_owned(),
            None => idgen.generate("ValueSlot", |candidate| host.exists(candidate)),
        };
        ValueSlot::create(&mut *host, key, initial.into())
    }
}
