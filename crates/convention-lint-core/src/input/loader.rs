//! DTO → validated fact conversion.

use crate::fact::{
    ClassDecl, ColumnDecl, CommandDecl, ConfigEntry, Fact, FactData, FactError, FactKind,
    HttpVerb, MethodDecl, MigrationFile, RelationDecl, RouteDecl, TableDecl, ValidationRuleRef,
    ViewFile,
};
use crate::types::Location;

use super::dto::{FactDto, FactRecordDto};

/// Converts one record into a validated fact.
///
/// # Errors
///
/// Returns [`FactError::InvalidFact`] if the payload fails validation.
pub fn convert_record(record: FactRecordDto) -> Result<Fact, FactError> {
    let location = Location::new(record.file.as_str(), record.line, record.column);
    let data = convert_payload(record.fact, &record.file)?;
    Ok(Fact::new(location, data))
}

fn convert_payload(dto: FactDto, file: &str) -> Result<FactData, FactError> {
    let data = match dto {
        FactDto::Class {
            name,
            class_kind,
            file_name,
        } => ClassDecl::new(name, class_kind, file_name)?.into(),
        FactDto::Method {
            name,
            owner_kind,
            verbs,
        } => MethodDecl::new(name, owner_kind, parse_verbs(&verbs)?)?.into(),
        FactDto::Route {
            path,
            http_verb,
            name,
            params,
        } => RouteDecl::new(path, &http_verb, name, params)?.into(),
        FactDto::ConfigEntry { key } => ConfigEntry::new(file, key)?.into(),
        FactDto::Migration { name, timestamp } => MigrationFile::new(name, timestamp)?.into(),
        FactDto::View { path } => ViewFile::new(path.unwrap_or_else(|| file.to_string()))?.into(),
        FactDto::Table { name, model, pivot } => TableDecl::new(name, model, pivot)?.into(),
        FactDto::Column {
            table,
            name,
            references,
        } => ColumnDecl::new(table, name, references)?.into(),
        FactDto::Relation {
            model,
            related,
            relation,
            table,
            foreign_key,
        } => RelationDecl::new(model, related, relation, table, foreign_key)?.into(),
        FactDto::Command { name } => CommandDecl::new(name)?.into(),
        FactDto::ValidationRule { identifier } => ValidationRuleRef::new(identifier)?.into(),
    };
    Ok(data)
}

fn parse_verbs(verbs: &[String]) -> Result<Vec<HttpVerb>, FactError> {
    verbs
        .iter()
        .map(|v| {
            HttpVerb::parse(v).ok_or_else(|| {
                FactError::invalid(FactKind::Method, format!("unknown http verb `{v}`"))
            })
        })
        .collect()
}
