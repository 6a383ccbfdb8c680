use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Identifiers of the metadata tables a wrapper reference can point into.
///
/// Only the tables that the instrumentation rewriter touches when it emits calls to wrapper
/// methods are listed. The numeric values are the table ids defined by ECMA-335 and match the
/// high byte of a [`crate::metadata::token::Token`].
///
/// ## Reference
/// * [ECMA-335 Partition II, Section 22](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Metadata Tables
#[derive(Clone, Copy, PartialEq, Debug, EnumIter, EnumCount, Eq, Hash)]
pub enum TableId {
    /// `TypeRef` table (0x01) - References to types defined in external assemblies.
    ///
    /// Wrapper parent types live in the instrumentation assembly, so their tokens are
    /// type references from the point of view of the rewritten module.
    TypeRef = 0x01,

    /// `TypeDef` table (0x02) - Types defined in the current module.
    TypeDef = 0x02,

    /// `Field` table (0x04) - Field definitions.
    Field = 0x04,

    /// `MethodDef` table (0x06) - Method definitions in the current module.
    MethodDef = 0x06,

    /// `MemberRef` table (0x0A) - References to methods or fields of other types.
    ///
    /// Calls to wrapper methods are emitted against member references.
    MemberRef = 0x0A,

    /// `ModuleRef` table (0x1A) - References to other modules.
    ModuleRef = 0x1A,

    /// `TypeSpec` table (0x1B) - Instantiated generic types.
    TypeSpec = 0x1B,

    /// `AssemblyRef` table (0x23) - References to external assemblies.
    AssemblyRef = 0x23,

    /// `MethodSpec` table (0x2B) - Instantiated generic methods.
    MethodSpec = 0x2B,
}

impl TableId {
    /// Looks up a table by its raw id, `None` for tables not listed in [`TableId`]
    #[must_use]
    pub fn from_id(id: u8) -> Option<TableId> {
        TableId::iter().find(|table| *table as u8 == id)
    }

    /// Returns `true` for tables whose tokens can be the target of a `call` instruction
    #[must_use]
    pub fn is_callable(self) -> bool {
        matches!(
            self,
            TableId::MethodDef | TableId::MemberRef | TableId::MethodSpec
        )
    }

    /// Returns `true` for tables whose tokens identify a type
    #[must_use]
    pub fn is_type(self) -> bool {
        matches!(self, TableId::TypeRef | TableId::TypeDef | TableId::TypeSpec)
    }
}
