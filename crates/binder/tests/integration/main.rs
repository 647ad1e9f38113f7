use {
    ast::{
        BaseTableRef, ColumnDefinition, ColumnRef, CreateIndexInfo, CreateInfo, CreateInfoBase,
        CreateMacroInfo, CreateSchemaInfo, CreateSequenceInfo, CreateStatement, CreateTableInfo,
        CreateTypeInfo, CreateViewInfo, CreateSecretInfo, Expr, MacroDefinition, SelectItem,
        SelectStatement, Statement,
    },
    binder::{Binder, BoundStatement, ClientContext, Error, SecretBinder, StatementReturnType},
    catalog::{MemoryCatalog, MemoryCatalogList, SearchPath, SearchPathEntry},
    def::{EntryKind, EntryRef, LogicalType, TypeKind, Value},
    plan::{DummyScanPlanNode, LogicalPlan, ScalarExpr},
};

fn world() -> MemoryCatalogList {
    let mut list = MemoryCatalogList::new("memory");
    list.attach(MemoryCatalog::new("db2"));

    let catalog = list.catalog_mut("memory").unwrap();
    catalog
        .create_table(
            "main",
            "people",
            vec![
                ("name".into(), LogicalType::varchar()),
                ("age".into(), LogicalType::integer()),
            ],
            false,
        )
        .unwrap();
    catalog
        .create_type("main", "mood", LogicalType::varchar(), None)
        .unwrap();
    catalog.create_macro("main", "double", vec![1]).unwrap();

    let temp = list.catalog_mut("temp").unwrap();
    temp.create_table(
        "main",
        "scratch",
        vec![("v".into(), LogicalType::integer())],
        true,
    )
    .unwrap();

    list
}

fn base() -> CreateInfoBase {
    CreateInfoBase::default()
}

fn view_info(name: &str, query: SelectStatement) -> CreateViewInfo {
    CreateViewInfo {
        base: base(),
        name: name.into(),
        aliases: vec![],
        query,
        names: vec![],
        types: vec![],
        sql: None,
    }
}

fn bind(list: &MemoryCatalogList, info: CreateInfo) -> Result<BoundStatement, Error> {
    let context = ClientContext::new(list);
    bind_in(&context, info)
}

fn bind_in(context: &ClientContext, info: CreateInfo) -> Result<BoundStatement, Error> {
    Binder::new(context).bind(Statement::Create(CreateStatement { info }))
}

fn view_node(bound: &BoundStatement) -> &CreateViewInfo {
    match &bound.plan {
        LogicalPlan::CreateView(node) => match &node.info {
            CreateInfo::View(info) => info,
            _ => panic!("not a view info"),
        },
        _ => panic!("not a create view plan"),
    }
}

#[test]
fn ddl_statements_report_a_count_column() {
    let list = world();
    let info = CreateInfo::Sequence(CreateSequenceInfo {
        base: base(),
        name: "seq".into(),
        start: 1,
        increment: 1,
        min_value: None,
        max_value: None,
        cycle: false,
    });

    let context = ClientContext::new(&list);
    let mut binder = Binder::new(&context);
    let bound = binder
        .bind(Statement::Create(CreateStatement { info }))
        .unwrap();

    assert_eq!(bound.names, vec!["Count"]);
    assert_eq!(bound.types, vec![LogicalType::bigint()]);
    let properties = binder.statement_properties();
    assert_eq!(properties.return_type, StatementReturnType::Nothing);
    assert!(!properties.allow_stream_result);
    assert!(properties.modified_databases.contains("memory"));
}

#[test]
fn a_schema_qualifier_naming_a_catalog_is_reinterpreted() {
    let list = world();
    let mut info = view_info("v", SelectStatement::select_values(vec![]));
    info.base.schema = Some("db2".into());

    let bound = bind(&list, CreateInfo::View(info)).unwrap();
    let info = view_node(&bound);
    assert_eq!(info.base.catalog.as_deref(), Some("db2"));
    assert_eq!(info.base.schema.as_deref(), Some("main"));
}

#[test]
fn a_name_reaching_both_a_catalog_and_a_schema_is_ambiguous() {
    let mut list = world();
    list.attach(MemoryCatalog::new("analytics"));
    list.catalog_mut("memory").unwrap().create_schema("analytics");

    let mut info = view_info("v", SelectStatement::select_values(vec![]));
    info.base.schema = Some("analytics".into());

    assert!(matches!(
        bind(&list, CreateInfo::View(info)).unwrap_err(),
        Error::AmbiguousReference { .. }
    ));
}

#[test]
fn temporary_objects_are_confined_to_the_temp_catalog() {
    let list = world();

    let mut info = view_info(
        "v",
        SelectStatement::select_values(vec![Expr::Literal(Value::Integer(1))]),
    );
    info.base.temporary = true;
    info.base.catalog = Some("memory".into());
    assert!(matches!(
        bind(&list, CreateInfo::View(info)).unwrap_err(),
        Error::TemporaryRequiresTempCatalog { .. }
    ));

    let mut info = view_info(
        "v",
        SelectStatement::select_values(vec![Expr::Literal(Value::Integer(1))]),
    );
    info.base.catalog = Some("temp".into());
    assert!(matches!(
        bind(&list, CreateInfo::View(info)).unwrap_err(),
        Error::ReservedTempCatalog { .. }
    ));

    // unqualified temporary creation lands in the temp catalog and leaves
    // no modified-database trace
    let mut info = view_info(
        "v",
        SelectStatement::select_values(vec![Expr::Literal(Value::Integer(1))]),
    );
    info.base.temporary = true;
    let context = ClientContext::new(&list);
    let mut binder = Binder::new(&context);
    let bound = binder
        .bind(Statement::Create(CreateStatement {
            info: CreateInfo::View(info),
        }))
        .unwrap();
    assert_eq!(view_node(&bound).base.catalog.as_deref(), Some("temp"));
    assert!(binder.statement_properties().modified_databases.is_empty());
}

#[test]
fn the_system_catalog_rejects_writes() {
    let list = world();

    let mut info = CreateSchemaInfo { base: base() };
    info.base.catalog = Some("system".into());
    info.base.schema = Some("extra".into());
    assert!(matches!(
        bind(&list, CreateInfo::Schema(info)).unwrap_err(),
        Error::SystemCatalogWrite { .. }
    ));

    let mut info = view_info("v", SelectStatement::select_values(vec![]));
    info.base.catalog = Some("system".into());
    assert!(matches!(
        bind(&list, CreateInfo::View(info)).unwrap_err(),
        Error::SystemCatalogWrite { .. }
    ));
}

#[test]
fn view_aliases_override_query_names_by_position() {
    let list = world();
    let mut info = view_info("v", SelectStatement::select_star("people"));
    info.aliases = vec!["person".into()];

    let bound = bind(&list, CreateInfo::View(info)).unwrap();
    let info = view_node(&bound);
    assert_eq!(info.names, vec!["person", "age"]);
    assert_eq!(
        info.types,
        vec![LogicalType::varchar(), LogicalType::integer()]
    );
}

#[test]
fn more_view_aliases_than_query_columns_fail() {
    let list = world();
    let mut info = view_info("v", SelectStatement::select_star("people"));
    info.aliases = vec!["a".into(), "b".into(), "c".into()];

    assert!(matches!(
        bind(&list, CreateInfo::View(info)).unwrap_err(),
        Error::TooManyAliases { .. }
    ));
}

#[test]
fn view_dependencies_follow_the_feature_flag() {
    let list = world();
    let people = EntryRef {
        catalog: "memory".into(),
        schema: "main".into(),
        kind: EntryKind::Table,
        name: "people".into(),
    };

    let context = ClientContext::new(&list);
    let info = view_info("v", SelectStatement::select_star("people"));
    let bound = bind_in(&context, CreateInfo::View(info)).unwrap();
    assert!(view_node(&bound).base.dependencies.is_empty());

    let mut context = ClientContext::new(&list);
    context.config.enable_view_dependencies = true;
    let info = view_info("v", SelectStatement::select_star("people"));
    let bound = bind_in(&context, CreateInfo::View(info)).unwrap();
    assert!(view_node(&bound).base.dependencies.contains(&people));
}

#[test]
fn cross_catalog_dependencies_are_never_recorded() {
    let list = world();
    let mut context = ClientContext::new(&list);
    context.config.enable_view_dependencies = true;

    // the view lives in db2 but reads from memory
    let mut info = view_info(
        "v",
        SelectStatement {
            select_list: vec![SelectItem::Star],
            from: Some(BaseTableRef {
                catalog: Some("memory".into()),
                schema: Some("main".into()),
                table: "people".into(),
            }),
        },
    );
    info.base.catalog = Some("db2".into());

    let bound = bind_in(&context, CreateInfo::View(info)).unwrap();
    assert!(view_node(&bound).base.dependencies.is_empty());
}

#[test]
fn macro_overloads_must_differ_in_arity() {
    let list = world();
    let overload = |params: &[&str]| MacroDefinition {
        parameters: params.iter().map(|p| ColumnRef::unqualified(*p)).collect(),
        default_parameters: vec![],
        body: Expr::Literal(Value::Integer(1)),
    };
    let info = CreateMacroInfo {
        base: base(),
        name: "m".into(),
        macros: vec![overload(&["a"]), overload(&["b"])],
    };

    assert!(matches!(
        bind(&list, CreateInfo::Macro(info)).unwrap_err(),
        Error::AmbiguousMacroOverload { count: 1, .. }
    ));
}

#[test]
fn macro_bodies_defer_unresolved_names_but_not_real_errors() {
    let list = world();

    // y is not a parameter; resolution waits for the invocation site
    let deferred = CreateMacroInfo {
        base: base(),
        name: "m".into(),
        macros: vec![MacroDefinition {
            parameters: vec![ColumnRef::unqualified("x")],
            default_parameters: vec![],
            body: Expr::Binary {
                op: ast::BinaryOperator::Add,
                left: Box::new(Expr::Column(ColumnRef::unqualified("x"))),
                right: Box::new(Expr::Column(ColumnRef::unqualified("y"))),
            },
        }],
    };
    assert!(bind(&list, CreateInfo::Macro(deferred)).is_ok());

    // an unknown function is a definition-time error
    let broken = CreateMacroInfo {
        base: base(),
        name: "m".into(),
        macros: vec![MacroDefinition {
            parameters: vec![],
            default_parameters: vec![],
            body: Expr::Function {
                name: "no_such_fn".into(),
                args: vec![],
            },
        }],
    };
    assert!(matches!(
        bind(&list, CreateInfo::Macro(broken)).unwrap_err(),
        Error::UnknownFunction { .. }
    ));

    let with_parameter = CreateMacroInfo {
        base: base(),
        name: "m".into(),
        macros: vec![MacroDefinition {
            parameters: vec![],
            default_parameters: vec![],
            body: Expr::Parameter("1".into()),
        }],
    };
    assert!(matches!(
        bind(&list, CreateInfo::Macro(with_parameter)).unwrap_err(),
        Error::MacroParameterExpression { .. }
    ));

    let qualified = CreateMacroInfo {
        base: base(),
        name: "m".into(),
        macros: vec![MacroDefinition {
            parameters: vec![ColumnRef {
                column: "x".into(),
                table: Some("t".into()),
            }],
            default_parameters: vec![],
            body: Expr::Literal(Value::Integer(1)),
        }],
    };
    assert!(matches!(
        bind(&list, CreateInfo::Macro(qualified)).unwrap_err(),
        Error::QualifiedMacroParameter { .. }
    ));
}

#[test]
fn macro_dependencies_record_referenced_macros_when_enabled() {
    let list = world();
    let mut context = ClientContext::new(&list);
    context.config.enable_macro_dependencies = true;

    let info = CreateMacroInfo {
        base: base(),
        name: "m".into(),
        macros: vec![MacroDefinition {
            parameters: vec![ColumnRef::unqualified("x")],
            default_parameters: vec![],
            body: Expr::Function {
                name: "double".into(),
                args: vec![Expr::Column(ColumnRef::unqualified("x"))],
            },
        }],
    };
    let bound = bind_in(&context, CreateInfo::Macro(info)).unwrap();

    let info = match &bound.plan {
        LogicalPlan::CreateMacro(node) => match &node.info {
            CreateInfo::Macro(info) => info,
            _ => panic!("not a macro info"),
        },
        _ => panic!("not a create macro plan"),
    };
    assert!(info.base.dependencies.contains(&EntryRef {
        catalog: "memory".into(),
        schema: "main".into(),
        kind: EntryKind::Macro,
        name: "double".into(),
    }));
}

#[test]
fn create_type_resolves_every_nested_reference() {
    let list = world();
    let info = CreateTypeInfo {
        base: base(),
        name: "profile".into(),
        ty: Some(LogicalType::record(vec![
            ("id".into(), LogicalType::integer()),
            ("current".into(), LogicalType::user("mood")),
            (
                "history".into(),
                LogicalType::list(LogicalType::user("mood")),
            ),
        ])),
        query: None,
    };

    let bound = bind(&list, CreateInfo::Type(info)).unwrap();
    let info = match &bound.plan {
        LogicalPlan::CreateType(node) => match &node.info {
            CreateInfo::Type(info) => info,
            _ => panic!("not a type info"),
        },
        _ => panic!("not a create type plan"),
    };
    assert!(!info.ty.as_ref().unwrap().contains_user());
    assert!(info.base.dependencies.contains(&EntryRef {
        catalog: "memory".into(),
        schema: "main".into(),
        kind: EntryKind::Type,
        name: "mood".into(),
    }));
}

#[test]
fn create_type_alias_collapses_to_the_concrete_type() {
    let list = world();
    let info = CreateTypeInfo {
        base: base(),
        name: "vibe".into(),
        ty: Some(LogicalType::user("mood")),
        query: None,
    };

    let bound = bind(&list, CreateInfo::Type(info)).unwrap();
    let info = match &bound.plan {
        LogicalPlan::CreateType(node) => match &node.info {
            CreateInfo::Type(info) => info,
            _ => panic!("not a type info"),
        },
        _ => panic!("not a create type plan"),
    };
    assert_eq!(info.ty.as_ref().unwrap().kind, TypeKind::Varchar);
}

#[test]
fn enum_from_query_takes_one_column_coerced_to_varchar() {
    let list = world();
    let single_integer = SelectStatement {
        select_list: vec![SelectItem::Expr {
            expr: Expr::Column(ColumnRef::unqualified("age")),
            alias: None,
        }],
        from: Some(BaseTableRef {
            catalog: None,
            schema: None,
            table: "people".into(),
        }),
    };
    let info = CreateTypeInfo {
        base: base(),
        name: "ages".into(),
        ty: None,
        query: Some(single_integer),
    };

    let bound = bind(&list, CreateInfo::Type(info)).unwrap();
    let node = match &bound.plan {
        LogicalPlan::CreateType(node) => node,
        _ => panic!("not a create type plan"),
    };
    assert_eq!(node.children.len(), 1);
    let projection = match &node.children[0] {
        LogicalPlan::Projection(projection) => projection,
        _ => panic!("no coercion projection"),
    };
    assert!(matches!(
        projection.expressions.as_slice(),
        [ScalarExpr::Cast { ty, .. }] if ty.kind == TypeKind::Varchar
    ));

    let info = CreateTypeInfo {
        base: base(),
        name: "ages".into(),
        ty: None,
        query: Some(SelectStatement::select_star("people")),
    };
    assert!(matches!(
        bind(&list, CreateInfo::Type(info)).unwrap_err(),
        Error::ExpectedSingleColumn { columns: 2 }
    ));
}

#[test]
fn indexes_bind_against_base_tables_only() {
    let mut list = world();
    list.catalog_mut("memory")
        .unwrap()
        .create_view(
            "main",
            "grownups",
            catalog::ViewEntry {
                names: vec!["name".into()],
                types: vec![LogicalType::varchar()],
                query: SelectStatement::select_star("people"),
            },
        )
        .unwrap();

    let index = |table: &str| CreateIndexInfo {
        base: base(),
        name: "idx".into(),
        table: table.into(),
        unique: false,
        expressions: vec![Expr::Column(ColumnRef::unqualified(if table == "scratch" {
            "v"
        } else {
            "age"
        }))],
    };

    assert!(matches!(
        bind(&list, CreateInfo::Index(index("grownups"))).unwrap_err(),
        Error::CannotIndexView { .. }
    ));

    let context = ClientContext::new(&list);
    let mut binder = Binder::new(&context);
    let bound = binder
        .bind(Statement::Create(CreateStatement {
            info: CreateInfo::Index(index("people")),
        }))
        .unwrap();
    let node = match &bound.plan {
        LogicalPlan::CreateIndex(node) => node,
        _ => panic!("not a create index plan"),
    };
    assert!(!node.info.base.temporary);
    assert_eq!(node.table.name, "people");
    assert_eq!(node.scan.columns.len(), 2);
    assert!(matches!(
        node.expressions.as_slice(),
        [ScalarExpr::ColumnRef { index: 1, .. }]
    ));
    assert!(binder
        .statement_properties()
        .modified_databases
        .contains("memory"));

    // an index on a temporary table becomes temporary itself
    let context = ClientContext::new(&list);
    let mut binder = Binder::new(&context);
    let bound = binder
        .bind(Statement::Create(CreateStatement {
            info: CreateInfo::Index(index("scratch")),
        }))
        .unwrap();
    let node = match &bound.plan {
        LogicalPlan::CreateIndex(node) => node,
        _ => panic!("not a create index plan"),
    };
    assert!(node.info.base.temporary);
    assert!(binder.statement_properties().modified_databases.is_empty());
}

#[test]
fn create_table_as_select_streams_changed_rows() {
    let list = world();
    let info = CreateTableInfo {
        base: base(),
        table: "copy".into(),
        columns: vec![],
        constraints: vec![],
        query: Some(SelectStatement::select_star("people")),
    };

    let context = ClientContext::new(&list);
    let mut binder = Binder::new(&context);
    let bound = binder
        .bind(Statement::Create(CreateStatement {
            info: CreateInfo::Table(info),
        }))
        .unwrap();
    assert_eq!(
        binder.statement_properties().return_type,
        StatementReturnType::ChangedRows
    );

    let node = match &bound.plan {
        LogicalPlan::CreateTable(node) => node,
        _ => panic!("not a create table plan"),
    };
    assert_eq!(node.children.len(), 1);
    assert_eq!(node.bound.columns.len(), 2);
    assert_eq!(node.bound.columns[0].name, "name");

    // the plain form produces no rows
    let info = CreateTableInfo {
        base: base(),
        table: "t".into(),
        columns: vec![ColumnDefinition {
            name: "a".into(),
            ty: LogicalType::integer(),
            constraints: vec![],
        }],
        constraints: vec![],
        query: None,
    };
    let mut binder = Binder::new(&context);
    binder
        .bind(Statement::Create(CreateStatement {
            info: CreateInfo::Table(info),
        }))
        .unwrap();
    assert_eq!(
        binder.statement_properties().return_type,
        StatementReturnType::Nothing
    );
}

#[test]
fn table_columns_may_use_registered_types() {
    let list = world();
    let info = CreateTableInfo {
        base: base(),
        table: "t".into(),
        columns: vec![ColumnDefinition {
            name: "m".into(),
            ty: LogicalType::user("mood"),
            constraints: vec![],
        }],
        constraints: vec![],
        query: None,
    };

    let bound = bind(&list, CreateInfo::Table(info)).unwrap();
    let node = match &bound.plan {
        LogicalPlan::CreateTable(node) => node,
        _ => panic!("not a create table plan"),
    };
    assert_eq!(node.bound.columns[0].ty.kind, TypeKind::Varchar);
    assert!(node.bound.info.base.dependencies.contains(&EntryRef {
        catalog: "memory".into(),
        schema: "main".into(),
        kind: EntryKind::Type,
        name: "mood".into(),
    }));
}

#[test]
fn secrets_need_an_attached_manager() {
    struct StubSecrets;

    impl SecretBinder for StubSecrets {
        fn bind_create_secret(&self, info: CreateSecretInfo) -> binder::Result<BoundStatement> {
            Ok(BoundStatement {
                names: vec![format!("secret:{}", info.name)],
                types: vec![LogicalType::boolean()],
                plan: LogicalPlan::DummyScan(DummyScanPlanNode),
            })
        }
    }

    let list = world();
    let info = || CreateSecretInfo {
        base: base(),
        name: "s3".into(),
        secret_type: "s3".into(),
        provider: None,
        options: vec![],
    };

    assert!(matches!(
        bind(&list, CreateInfo::Secret(info())).unwrap_err(),
        Error::SecretsUnsupported { .. }
    ));

    let stub = StubSecrets;
    let mut context = ClientContext::new(&list);
    context.secrets = Some(&stub);
    let bound = bind_in(&context, CreateInfo::Secret(info())).unwrap();
    assert_eq!(bound.names, vec!["secret:s3"]);
}

#[test]
fn a_custom_index_planner_takes_over() {
    use std::cell::Cell;

    struct RecordingPlanner {
        called: Cell<bool>,
    }

    impl binder::CreateIndexPlanner for RecordingPlanner {
        fn plan(&self, node: plan::CreateIndexPlanNode) -> binder::Result<LogicalPlan> {
            self.called.set(true);
            Ok(LogicalPlan::CreateIndex(Box::new(node)))
        }
    }

    let list = world();
    let planner = RecordingPlanner {
        called: Cell::new(false),
    };
    let mut context = ClientContext::new(&list);
    context.index_planner = Some(&planner);

    let info = CreateIndexInfo {
        base: base(),
        name: "idx".into(),
        table: "people".into(),
        unique: true,
        expressions: vec![Expr::Column(ColumnRef::unqualified("name"))],
    };
    bind_in(&context, CreateInfo::Index(info)).unwrap();
    assert!(planner.called.get());
}

#[test]
fn the_search_path_orders_unqualified_resolution() {
    let mut list = world();
    list.catalog_mut("db2").unwrap().create_schema("reports");

    let mut context = ClientContext::new(&list);
    context.search_path = SearchPath::new(vec![
        SearchPathEntry {
            catalog: "db2".into(),
            schema: "reports".into(),
        },
        SearchPathEntry {
            catalog: "memory".into(),
            schema: "main".into(),
        },
    ]);

    let info = view_info(
        "v",
        SelectStatement::select_values(vec![Expr::Literal(Value::Integer(1))]),
    );
    let bound = bind_in(&context, CreateInfo::View(info)).unwrap();
    let info = view_node(&bound);
    assert_eq!(info.base.catalog.as_deref(), Some("db2"));
    assert_eq!(info.base.schema.as_deref(), Some("reports"));
}
