use {
    crate::{
        dependency::DependencyTracker,
        error::{
            IncompatibleModifierSnafu, InvalidModifierSnafu, ModifiersNotSupportedSnafu,
            TooManyModifiersSnafu, TypeNotFoundSnafu,
        },
        Binder, Result,
    },
    catalog::{
        BindTypeModifiers, BindTypeModifiersInput, CatalogEntry, EntryDetails, OnNotFound,
        SYSTEM_CATALOG,
    },
    def::{EntryKind, LogicalType, TypeKind, UserTypeRef, Value},
    snafu::prelude::*,
};

fn is_valid_user_type(entry: &Option<CatalogEntry>) -> bool {
    matches!(
        entry,
        Some(CatalogEntry {
            details: EntryDetails::Type(_),
            ..
        })
    )
}

impl Binder<'_> {
    /// Recursively resolve every `User` reference in a type tree against
    /// the catalog, returning a new owned tree. Alias and modifier
    /// metadata survive the rebuild. Total: after a successful bind no
    /// `User` node remains anywhere in the result.
    pub(crate) fn bind_logical_type(
        &self,
        ty: &LogicalType,
        catalog: Option<&str>,
        schema: &str,
        tracker: &mut Option<DependencyTracker>,
    ) -> Result<LogicalType> {
        let kind = match &ty.kind {
            TypeKind::User(user) => {
                return self.bind_user_type(user, catalog, schema, tracker);
            }
            TypeKind::List(child) => TypeKind::List(Box::new(
                self.bind_logical_type(child, catalog, schema, tracker)?,
            )),
            TypeKind::Map { key, value } => TypeKind::Map {
                key: Box::new(self.bind_logical_type(key, catalog, schema, tracker)?),
                value: Box::new(self.bind_logical_type(value, catalog, schema, tracker)?),
            },
            TypeKind::Array { element, size } => TypeKind::Array {
                element: Box::new(self.bind_logical_type(element, catalog, schema, tracker)?),
                size: *size,
            },
            TypeKind::Struct(fields) => TypeKind::Struct(
                fields
                    .iter()
                    .map(|(name, field)| {
                        Ok((
                            name.clone(),
                            self.bind_logical_type(field, catalog, schema, tracker)?,
                        ))
                    })
                    .collect::<Result<_>>()?,
            ),
            TypeKind::Union(members) => TypeKind::Union(
                members
                    .iter()
                    .map(|(name, member)| {
                        Ok((
                            name.clone(),
                            self.bind_logical_type(member, catalog, schema, tracker)?,
                        ))
                    })
                    .collect::<Result<_>>()?,
            ),
            other => other.clone(),
        };

        // reattach the metadata after the rebuild
        Ok(LogicalType {
            kind,
            alias: ty.alias.clone(),
            modifiers: ty.modifiers.clone(),
        })
    }

    fn bind_user_type(
        &self,
        user: &UserTypeRef,
        catalog: Option<&str>,
        schema: &str,
        tracker: &mut Option<DependencyTracker>,
    ) -> Result<LogicalType> {
        let entry = match catalog {
            Some(catalog) => {
                // most specific wins: the schema written on the reference,
                // then the context schema, then any schema of the context
                // catalog; the system catalog has the last, authoritative
                // word
                let mut entry = None;
                if let Some(explicit) = &user.schema {
                    entry = self.get_entry(
                        EntryKind::Type,
                        catalog,
                        Some(explicit),
                        &user.name,
                        OnNotFound::ReturnNull,
                        tracker,
                    )?;
                }
                if !is_valid_user_type(&entry) {
                    entry = self.get_entry(
                        EntryKind::Type,
                        catalog,
                        Some(schema),
                        &user.name,
                        OnNotFound::ReturnNull,
                        tracker,
                    )?;
                }
                if !is_valid_user_type(&entry) {
                    entry = self.get_entry(
                        EntryKind::Type,
                        catalog,
                        None,
                        &user.name,
                        OnNotFound::ReturnNull,
                        tracker,
                    )?;
                }
                if !is_valid_user_type(&entry) {
                    entry = self.get_entry(
                        EntryKind::Type,
                        SYSTEM_CATALOG,
                        None,
                        &user.name,
                        OnNotFound::ReturnNull,
                        tracker,
                    )?;
                }
                entry
            }
            None => {
                let mut type_catalog = user.catalog.clone();
                let mut type_schema = user.schema.clone();
                self.bind_schema_or_catalog(&mut type_catalog, &mut type_schema)?;

                let path = &self.context().search_path;
                let catalog = type_catalog
                    .or_else(|| {
                        type_schema
                            .as_deref()
                            .and_then(|schema| path.default_catalog(schema))
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| self.context().catalogs.default_database().to_string());
                self.get_entry(
                    EntryKind::Type,
                    &catalog,
                    type_schema.as_deref(),
                    &user.name,
                    OnNotFound::ReturnNull,
                    tracker,
                )?
            }
        };

        let type_entry = match entry {
            Some(CatalogEntry {
                details: EntryDetails::Type(type_entry),
                ..
            }) => type_entry,
            _ => return TypeNotFoundSnafu { name: &user.name }.fail(),
        };

        // a user type may alias another user type; resolution has to reach
        // a concrete type before modifiers apply
        let resolved = self.bind_logical_type(&type_entry.ty, catalog, schema, tracker)?;
        apply_type_modifiers(resolved, user, type_entry.bind_modifiers)
    }
}

fn apply_type_modifiers(
    resolved: LogicalType,
    user: &UserTypeRef,
    bind_modifiers: Option<BindTypeModifiers>,
) -> Result<LogicalType> {
    if let Some(bind_modifiers) = bind_modifiers {
        // a custom modifier binder constructs the final type itself
        return bind_modifiers(BindTypeModifiersInput {
            base: resolved,
            modifiers: user.modifiers.clone(),
        })
        .map_err(|message| {
            InvalidModifierSnafu {
                name: &user.name,
                message,
            }
            .build()
        });
    }

    match &resolved.modifiers {
        Some(slots) => {
            ensure!(
                user.modifiers.len() <= slots.len(),
                TooManyModifiersSnafu {
                    name: &user.name,
                    supplied: user.modifiers.len(),
                    declared: slots.len(),
                }
            );

            let mut ty = resolved.clone();
            let slots = ty.modifiers.get_or_insert_with(Vec::new);
            for (slot, supplied) in slots.iter_mut().zip(&user.modifiers) {
                *slot = replace_modifier(slot, supplied, &user.name)?;
            }
            Ok(ty)
        }
        None => {
            ensure!(
                user.modifiers.is_empty(),
                ModifiersNotSupportedSnafu { name: &user.name }
            );
            Ok(resolved)
        }
    }
}

fn replace_modifier(slot: &Value, supplied: &Value, type_name: &str) -> Result<Value> {
    if supplied.kind() == slot.kind() {
        return Ok(supplied.clone());
    }
    supplied.try_default_cast(&slot.kind()).with_context(|| {
        IncompatibleModifierSnafu {
            value: supplied.clone(),
            name: type_name,
            expected: slot.kind(),
        }
    })
}
