use crate::error::StoreError;
use ulid::Ulid;

///
/// ReferenceProbe
///
/// One dependent module's ability to answer "does anything here still
/// reference this entity?". Probes are homogeneous and independent; the
/// checker owns an ordered list of them instead of one hard-wired
/// dependency per module.
///

pub trait ReferenceProbe {
    /// Name of the dependent module, used in blocked-mutation diagnostics.
    fn module(&self) -> &'static str;

    fn has_reference(&self, id: Ulid) -> Result<bool, StoreError>;
}

///
/// RelationshipChecker
///
/// The relationship gate: runs every configured probe against an entity id
/// and OR-reduces the answers. Probes are mutually independent, so the
/// reduction may short-circuit on the first hit; the first referencing
/// module is reported for diagnostics.
///

#[derive(Default)]
pub struct RelationshipChecker {
    probes: Vec<Box<dyn ReferenceProbe>>,
}

impl RelationshipChecker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_probe(mut self, probe: Box<dyn ReferenceProbe>) -> Self {
        self.probes.push(probe);
        self
    }

    pub fn push(&mut self, probe: Box<dyn ReferenceProbe>) {
        self.probes.push(probe);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// The first dependent module referencing `id`, or `None` when the
    /// entity is unreferenced everywhere.
    pub fn first_reference(&self, id: Ulid) -> Result<Option<&'static str>, StoreError> {
        for probe in &self.probes {
            if probe.has_reference(id)? {
                return Ok(Some(probe.module()));
            }
        }

        Ok(None)
    }
}
