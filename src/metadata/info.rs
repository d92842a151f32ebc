// Copyright (c) 2025 ADBC Drivers Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scalar capability answers.
//!
//! Most answers are constants. Identifier length limits and the index key
//! limit come from cached catalog lookups, the product version from the
//! server version, and the transaction answers depend on strict mode.

use crate::error::{Error, Result};
use crate::metadata::service::MetadataService;
use std::any::{Any, TypeId};
use std::fmt;

/// Transaction isolation levels, numbered like `java.sql.Connection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionIsolation {
    None = 0,
    ReadUncommitted = 1,
    ReadCommitted = 2,
    RepeatableRead = 4,
    Serializable = 8,
}

/// Result set holdability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Holdability {
    HoldCursorsOverCommit = 1,
    CloseCursorsAtCommit = 2,
}

/// Row id lifetime. Never reported; see [`MetadataService::row_id_lifetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowIdLifetime {
    Unsupported,
    ValidForever,
}

impl fmt::Display for TransactionIsolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionIsolation::None => "NONE",
            TransactionIsolation::ReadUncommitted => "READ UNCOMMITTED",
            TransactionIsolation::ReadCommitted => "READ COMMITTED",
            TransactionIsolation::RepeatableRead => "REPEATABLE READ",
            TransactionIsolation::Serializable => "SERIALIZABLE",
        };
        f.write_str(name)
    }
}

const SQL_KEYWORDS: &str = "alias,all,alter,analyzer,and,any,array,as,asc,\
always,array,add,\
bernoulli,between,blob,boolean,by,byte,begin,\
case,cast,catalogs,char_filters,clustered,coalesce,columns,\
constraint,copy,create,cross,current,current_date,current_time,\
current_timestamp,current_schema, column,\
date,day,delete,desc,describe,directory,distinct,distributed,\
double,drop,dynamic,delete,duplicate,default,\
else,end,escape,except,exists,explain,extends,extract,\
false,first,float,following,for,format,from,full,fulltext,functions,\
graphviz,group,geo_point,geo_shape,global,generated,\
having,hour,\
if,ignored,in,index,inner,insert,int,integer,intersect,interval,\
into,ip,is,isolation,\
join,\
last,left,like,limit,logical,long,local,level,\
materialized,minute,month,match,\
natural,not,null,nulls,\
object,off,offset,on,or,order,outer,over,optmize,only,\
partition,partitioned,partitions,plain,preceding,primary_key,\
range,recursive,refresh,reset,right,row,rows,repository,restore,\
schemas,second,select,set,shards,short,show,some,stratify,\
strict,string_type,substring,system,select,snapshot,session,\
table,tables,tablesample,text,then,time,timestamp,to,tokenizer,\
token_filters,true,type,try_cast,transaction,tablesample,\
transient,\
unbounded,union,update,using,\
values,view,\
when,where,with,\
year";

impl MetadataService {
    pub fn database_product_name(&self) -> &'static str {
        "Crate"
    }

    /// Version string of the connected server.
    pub fn database_product_version(&self) -> Result<String> {
        Ok(self.server_version()?.to_string())
    }

    pub fn database_major_version(&self) -> Result<u64> {
        Ok(self.server_version()?.component(0))
    }

    pub fn database_minor_version(&self) -> Result<u64> {
        Ok(self.server_version()?.component(1))
    }

    pub fn driver_name(&self) -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    pub fn driver_version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn url(&self) -> Option<&str> {
        self.config().url()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.config().user_name()
    }

    pub fn is_read_only(&self) -> bool {
        self.config().read_only()
    }

    /// Whether literals are quoted without backslash escapes on this
    /// connection. A configured value wins over the client's.
    pub fn standard_conforming_strings(&self) -> bool {
        self.config()
            .standard_conforming_strings()
            .unwrap_or_else(|| self.client().standard_conforming_strings())
    }

    pub fn identifier_quote_string(&self) -> &'static str {
        "\""
    }

    pub fn search_string_escape(&self) -> &'static str {
        "\\"
    }

    pub fn extra_name_characters(&self) -> &'static str {
        ""
    }

    pub fn sql_keywords(&self) -> &'static str {
        SQL_KEYWORDS
    }

    pub fn numeric_functions(&self) -> &'static str {
        "abs,ceil,floor,ln,log,random,round,sqrt,sin,asin,cos,acos,tan,atan"
    }

    pub fn string_functions(&self) -> &'static str {
        "concat,format,substr,char_length,bit_length,octet_length,lower,upper"
    }

    pub fn system_functions(&self) -> &'static str {
        ""
    }

    pub fn time_date_functions(&self) -> &'static str {
        "date_trunc,extract,date_format"
    }

    pub fn schema_term(&self) -> &'static str {
        "schema"
    }

    pub fn procedure_term(&self) -> &'static str {
        "function"
    }

    pub fn catalog_term(&self) -> &'static str {
        "database"
    }

    pub fn catalog_separator(&self) -> &'static str {
        "."
    }

    pub fn is_catalog_at_start(&self) -> bool {
        true
    }

    pub fn all_procedures_are_callable(&self) -> bool {
        true
    }

    pub fn all_tables_are_selectable(&self) -> bool {
        true
    }

    pub fn nulls_are_sorted_high(&self) -> bool {
        true
    }

    pub fn nulls_are_sorted_low(&self) -> bool {
        false
    }

    pub fn nulls_are_sorted_at_start(&self) -> bool {
        false
    }

    pub fn nulls_are_sorted_at_end(&self) -> bool {
        false
    }

    pub fn uses_local_files(&self) -> bool {
        false
    }

    pub fn supports_mixed_case_identifiers(&self) -> bool {
        false
    }

    pub fn stores_upper_case_identifiers(&self) -> bool {
        false
    }

    pub fn stores_lower_case_identifiers(&self) -> bool {
        true
    }

    pub fn stores_mixed_case_identifiers(&self) -> bool {
        false
    }

    pub fn supports_mixed_case_quoted_identifiers(&self) -> bool {
        true
    }

    pub fn stores_upper_case_quoted_identifiers(&self) -> bool {
        false
    }

    pub fn stores_lower_case_quoted_identifiers(&self) -> bool {
        false
    }

    pub fn stores_mixed_case_quoted_identifiers(&self) -> bool {
        false
    }

    pub fn supports_alter_table_with_add_column(&self) -> bool {
        true
    }

    pub fn supports_alter_table_with_drop_column(&self) -> bool {
        true
    }

    pub fn supports_column_aliasing(&self) -> bool {
        true
    }

    pub fn null_plus_non_null_is_null(&self) -> bool {
        true
    }

    pub fn supports_convert(&self) -> bool {
        false
    }

    pub fn supports_table_correlation_names(&self) -> bool {
        true
    }

    pub fn supports_different_table_correlation_names(&self) -> bool {
        false
    }

    pub fn supports_expressions_in_order_by(&self) -> bool {
        true
    }

    pub fn supports_order_by_unrelated(&self) -> bool {
        true
    }

    pub fn supports_group_by(&self) -> bool {
        true
    }

    pub fn supports_group_by_unrelated(&self) -> bool {
        true
    }

    pub fn supports_group_by_beyond_select(&self) -> bool {
        true
    }

    pub fn supports_like_escape_clause(&self) -> bool {
        true
    }

    pub fn supports_multiple_result_sets(&self) -> bool {
        true
    }

    pub fn supports_multiple_transactions(&self) -> bool {
        true
    }

    pub fn supports_non_nullable_columns(&self) -> bool {
        true
    }

    pub fn supports_minimum_sql_grammar(&self) -> bool {
        true
    }

    pub fn supports_core_sql_grammar(&self) -> bool {
        false
    }

    pub fn supports_extended_sql_grammar(&self) -> bool {
        false
    }

    pub fn supports_ansi92_entry_level_sql(&self) -> bool {
        true
    }

    pub fn supports_ansi92_intermediate_sql(&self) -> bool {
        false
    }

    pub fn supports_ansi92_full_sql(&self) -> bool {
        false
    }

    pub fn supports_integrity_enhancement_facility(&self) -> bool {
        true
    }

    pub fn supports_outer_joins(&self) -> bool {
        true
    }

    pub fn supports_full_outer_joins(&self) -> bool {
        true
    }

    pub fn supports_limited_outer_joins(&self) -> bool {
        true
    }

    pub fn supports_schemas_in_data_manipulation(&self) -> bool {
        true
    }

    pub fn supports_schemas_in_table_definitions(&self) -> bool {
        true
    }

    pub fn supports_schemas_in_privilege_definitions(&self) -> bool {
        true
    }

    pub fn supports_catalogs_in_data_manipulation(&self) -> bool {
        false
    }

    pub fn supports_catalogs_in_table_definitions(&self) -> bool {
        false
    }

    pub fn supports_positioned_delete(&self) -> bool {
        false
    }

    pub fn supports_positioned_update(&self) -> bool {
        false
    }

    pub fn supports_select_for_update(&self) -> bool {
        true
    }

    pub fn supports_stored_procedures(&self) -> bool {
        true
    }

    pub fn supports_subqueries_in_comparisons(&self) -> bool {
        true
    }

    pub fn supports_subqueries_in_exists(&self) -> bool {
        true
    }

    pub fn supports_subqueries_in_ins(&self) -> bool {
        true
    }

    pub fn supports_correlated_subqueries(&self) -> bool {
        true
    }

    pub fn supports_union(&self) -> bool {
        true
    }

    pub fn supports_union_all(&self) -> bool {
        true
    }

    pub fn supports_open_cursors_across_commit(&self) -> bool {
        false
    }

    pub fn supports_open_statements_across_commit(&self) -> bool {
        true
    }

    pub fn supports_batch_updates(&self) -> bool {
        true
    }

    pub fn supports_savepoints(&self) -> bool {
        true
    }

    pub fn supports_named_parameters(&self) -> bool {
        false
    }

    pub fn supports_multiple_open_results(&self) -> bool {
        false
    }

    pub fn supports_get_generated_keys(&self) -> bool {
        true
    }

    pub fn generated_key_always_returned(&self) -> bool {
        true
    }

    pub fn supports_statement_pooling(&self) -> bool {
        false
    }

    pub fn supports_stored_functions_using_call_syntax(&self) -> bool {
        true
    }

    pub fn supports_ref_cursors(&self) -> bool {
        true
    }

    pub fn auto_commit_failure_closes_all_result_sets(&self) -> bool {
        false
    }

    pub fn supports_result_set_holdability(&self, _holdability: Holdability) -> bool {
        true
    }

    pub fn result_set_holdability(&self) -> Holdability {
        Holdability::HoldCursorsOverCommit
    }

    // Limits. Zero means no limit.

    pub fn max_char_literal_length(&self) -> i32 {
        0
    }

    pub fn max_binary_literal_length(&self) -> i32 {
        0
    }

    pub fn max_columns_in_group_by(&self) -> i32 {
        0
    }

    pub fn max_columns_in_order_by(&self) -> i32 {
        0
    }

    pub fn max_columns_in_select(&self) -> i32 {
        0
    }

    pub fn max_columns_in_table(&self) -> i32 {
        1600
    }

    pub fn max_connections(&self) -> i32 {
        8192
    }

    pub fn max_index_length(&self) -> i32 {
        0
    }

    /// 1 GiB.
    pub fn max_row_size(&self) -> i32 {
        1_073_741_824
    }

    pub fn does_max_row_size_include_blobs(&self) -> bool {
        false
    }

    pub fn max_statement_length(&self) -> i32 {
        0
    }

    pub fn max_statements(&self) -> i32 {
        0
    }

    pub fn max_tables_in_select(&self) -> i32 {
        0
    }

    pub fn max_logical_lob_size(&self) -> i64 {
        0
    }

    pub fn max_columns_in_index(&self) -> Result<i32> {
        self.max_index_keys()
    }

    pub fn max_column_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    pub fn max_cursor_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    pub fn max_schema_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    pub fn max_procedure_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    pub fn max_catalog_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    pub fn max_table_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    pub fn max_user_name_length(&self) -> Result<i32> {
        self.max_name_length()
    }

    // Transactions are reported as unsupported in strict mode.

    pub fn supports_transactions(&self) -> bool {
        !self.config().strict()
    }

    pub fn default_transaction_isolation(&self) -> TransactionIsolation {
        if self.config().strict() {
            TransactionIsolation::None
        } else {
            TransactionIsolation::ReadCommitted
        }
    }

    pub fn supports_transaction_isolation_level(&self, level: TransactionIsolation) -> bool {
        if self.config().strict() {
            level == TransactionIsolation::None
        } else {
            level != TransactionIsolation::None
        }
    }

    pub fn supports_data_definition_and_data_manipulation_transactions(&self) -> bool {
        !self.config().strict()
    }

    pub fn supports_data_manipulation_transactions_only(&self) -> bool {
        false
    }

    pub fn data_definition_causes_transaction_commit(&self) -> bool {
        false
    }

    pub fn data_definition_ignored_in_transactions(&self) -> bool {
        false
    }

    /// Not implemented for this server.
    pub fn row_id_lifetime(&self) -> Result<RowIdLifetime> {
        Err(Error::NotImplemented("row_id_lifetime".to_string()))
    }

    /// Whether this service can be viewed as a `T`.
    pub fn is_wrapper_for<T: Any>(&self) -> bool {
        TypeId::of::<T>() == TypeId::of::<Self>()
    }

    /// View this service as a `T`.
    ///
    /// # Errors
    ///
    /// [`Error::Unwrap`] when `T` is not `MetadataService`.
    pub fn unwrap<T: Any>(&self) -> Result<&T> {
        (self as &dyn Any)
            .downcast_ref::<T>()
            .ok_or(Error::Unwrap {
                target: std::any::type_name::<T>(),
            })
    }
}
