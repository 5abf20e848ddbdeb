//! Template catalog: one pure rendering function per generated file kind.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  TemplateKind (selector)                                     │
//! │  ├── layer() / directory() / file_name()  -> where it lands  │
//! │  └── render(&FeatureSpec)                 -> what it holds   │
//! │                                                              │
//! │  RenderContext                                               │
//! │  └── {{ENTITY}} / {{NAME_SNAKE}} / {{MODEL_FILE}} ...        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! File stems are computed in [`files`] and shared by the planner and the
//! render contexts, so an import in one generated file always names a file
//! the planner actually emits.

mod context;
pub mod data;
pub mod domain;
pub mod presentation;

pub use context::RenderContext;

use std::fmt;

use crate::domain::{
    entities::feature_spec::FeatureSpec,
    naming::DerivedNames,
    value_objects::{CodeStyle, DataSourceVariant, Layer, StateManagement},
};

/// Extension of every generated file.
pub const FILE_EXTENSION: &str = "dart";

/// Selects the template (and therefore the file name) of one planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    // domain
    EntityContract,
    RepositoryContract,
    UseCase,
    // data
    ApiClient,
    DatasourceContract,
    LocalDatasource,
    RemoteDatasource,
    DataModel,
    NetResponse,
    RepositoryImpl(DataSourceVariant),
    // presentation
    Event(CodeStyle),
    State(StateManagement),
    Controller(StateManagement),
}

impl TemplateKind {
    /// Domain files in planning order.
    pub const DOMAIN: [TemplateKind; 3] = [Self::EntityContract, Self::RepositoryContract, Self::UseCase];

    /// Data files in planning order, minus the repository implementation
    /// which depends on the data-source variant.
    pub const DATA: [TemplateKind; 6] = [
        Self::ApiClient,
        Self::DatasourceContract,
        Self::LocalDatasource,
        Self::RemoteDatasource,
        Self::DataModel,
        Self::NetResponse,
    ];

    /// The state-management file set for a variant: event, state, controller
    /// for bloc; state, controller for cubit.
    pub fn state_management_set(sm: StateManagement) -> Vec<TemplateKind> {
        match sm {
            StateManagement::Cubit(_) => vec![Self::State(sm), Self::Controller(sm)],
            StateManagement::Bloc(style) => {
                vec![Self::Event(style), Self::State(sm), Self::Controller(sm)]
            }
        }
    }

    pub const fn layer(&self) -> Layer {
        match self {
            Self::EntityContract | Self::RepositoryContract | Self::UseCase => Layer::Domain,
            Self::ApiClient
            | Self::DatasourceContract
            | Self::LocalDatasource
            | Self::RemoteDatasource
            | Self::DataModel
            | Self::NetResponse
            | Self::RepositoryImpl(_) => Layer::Data,
            Self::Event(_) | Self::State(_) | Self::Controller(_) => Layer::Presentation,
        }
    }

    /// Directory relative to the feature root, e.g. `data/models`.
    pub fn directory(&self) -> String {
        let group = match self {
            Self::EntityContract => "entities",
            Self::RepositoryContract => "repositories",
            Self::UseCase => "usecases",
            Self::ApiClient | Self::DatasourceContract | Self::LocalDatasource | Self::RemoteDatasource => {
                "datasources"
            }
            Self::DataModel | Self::NetResponse => "models",
            Self::RepositoryImpl(_) => "repositories",
            // Events only exist for bloc.
            Self::Event(_) => "bloc",
            Self::State(sm) | Self::Controller(sm) => sm.dir_name(),
        };
        format!("{}/{}", self.layer(), group)
    }

    /// File name without extension.
    pub fn file_stem(&self, spec: &FeatureSpec) -> String {
        let entity = spec.entity();
        let feature = spec.feature();
        match self {
            Self::EntityContract => files::entity(entity),
            Self::RepositoryContract => files::repository_contract(entity),
            Self::UseCase => files::use_case(entity, spec.is_list()),
            Self::ApiClient => files::api(entity),
            Self::DatasourceContract => files::datasource_contract(entity),
            Self::LocalDatasource => files::local_datasource(entity),
            Self::RemoteDatasource => files::remote_datasource(entity),
            Self::DataModel => files::model(entity),
            Self::NetResponse => files::net_response(entity, spec.is_list()),
            Self::RepositoryImpl(_) => files::repository(entity),
            Self::Event(_) => files::event(feature),
            Self::State(_) => files::state(feature),
            Self::Controller(sm) => files::controller(feature, *sm),
        }
    }

    pub fn file_name(&self, spec: &FeatureSpec) -> String {
        format!("{}.{FILE_EXTENSION}", self.file_stem(spec))
    }

    /// Render this file's content. Pure; depends only on the feature spec.
    pub fn render(&self, spec: &FeatureSpec) -> String {
        let entity = spec.entity();
        let feature = spec.feature();
        let is_list = spec.is_list();
        match self {
            Self::EntityContract => domain::entity_contract(entity),
            Self::RepositoryContract => domain::repository_contract(entity, is_list),
            Self::UseCase => domain::use_case(entity, is_list),
            Self::ApiClient => data::api_client(entity, is_list),
            Self::DatasourceContract => data::datasource_contract(entity, is_list),
            Self::LocalDatasource => data::local_datasource(entity, is_list),
            Self::RemoteDatasource => data::remote_datasource(entity, is_list),
            Self::DataModel => data::data_model(entity),
            Self::NetResponse => data::net_response(entity, is_list),
            Self::RepositoryImpl(variant) => data::repository_impl(entity, is_list, *variant),
            Self::Event(style) => presentation::event(feature, *style),
            Self::State(sm) => presentation::state(feature, *sm),
            Self::Controller(sm) => presentation::controller(feature, *sm),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntityContract => f.write_str("entity contract"),
            Self::RepositoryContract => f.write_str("repository contract"),
            Self::UseCase => f.write_str("use case"),
            Self::ApiClient => f.write_str("api client"),
            Self::DatasourceContract => f.write_str("datasource contract"),
            Self::LocalDatasource => f.write_str("local datasource"),
            Self::RemoteDatasource => f.write_str("remote datasource"),
            Self::DataModel => f.write_str("data model"),
            Self::NetResponse => f.write_str("net response"),
            Self::RepositoryImpl(v) => write!(f, "repository ({v})"),
            Self::Event(style) => write!(f, "bloc event ({style})"),
            Self::State(sm) => write!(f, "{} state ({})", sm.dir_name(), sm.style()),
            Self::Controller(sm) => write!(f, "{} ({})", sm.dir_name(), sm.style()),
        }
    }
}

/// File stems of every generated file.
pub mod files {
    use super::*;

    pub fn entity(names: &DerivedNames) -> String {
        format!("{}_type", names.snake_case())
    }

    pub fn repository_contract(names: &DerivedNames) -> String {
        format!("{}_repo_type", names.snake_case())
    }

    pub fn use_case(names: &DerivedNames, is_list: bool) -> String {
        let suffix = if is_list { "_list" } else { "" };
        format!("load_{}{suffix}_usecase", names.snake_case())
    }

    pub fn api(names: &DerivedNames) -> String {
        format!("{}_api", names.snake_case())
    }

    pub fn datasource_contract(names: &DerivedNames) -> String {
        format!("{}_datasource_type", names.snake_case())
    }

    pub fn local_datasource(names: &DerivedNames) -> String {
        format!("{}_local_datasource", names.snake_case())
    }

    pub fn remote_datasource(names: &DerivedNames) -> String {
        format!("{}_remote_datasource", names.snake_case())
    }

    pub fn model(names: &DerivedNames) -> String {
        format!("{}_model", names.snake_case())
    }

    pub fn net_response(names: &DerivedNames, is_list: bool) -> String {
        let plural = if is_list { "s" } else { "" };
        format!("{}{plural}_net_response", names.snake_case())
    }

    pub fn repository(names: &DerivedNames) -> String {
        format!("{}_repo", names.snake_case())
    }

    pub fn event(names: &DerivedNames) -> String {
        format!("{}_event", names.snake_case())
    }

    pub fn state(names: &DerivedNames) -> String {
        format!("{}_state", names.snake_case())
    }

    pub fn controller(names: &DerivedNames, sm: StateManagement) -> String {
        format!("{}_{}", names.snake_case(), sm.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(is_list: bool) -> FeatureSpec {
        FeatureSpec::builder()
            .feature_name("todos")
            .entity_name("todo item")
            .list(is_list)
            .build()
            .unwrap()
    }

    #[test]
    fn file_names_follow_layout() {
        let single = spec(false);
        assert_eq!(TemplateKind::EntityContract.file_name(&single), "todo_item_type.dart");
        assert_eq!(TemplateKind::UseCase.file_name(&single), "load_todo_item_usecase.dart");
        assert_eq!(
            TemplateKind::NetResponse.file_name(&single),
            "todo_item_net_response.dart"
        );

        let list = spec(true);
        assert_eq!(TemplateKind::UseCase.file_name(&list), "load_todo_item_list_usecase.dart");
        assert_eq!(
            TemplateKind::NetResponse.file_name(&list),
            "todo_items_net_response.dart"
        );
    }

    #[test]
    fn presentation_files_use_feature_name() {
        let s = spec(false);
        let bloc = StateManagement::Bloc(CodeStyle::Default);
        let cubit = StateManagement::Cubit(CodeStyle::Default);
        assert_eq!(TemplateKind::Controller(bloc).file_name(&s), "todos_bloc.dart");
        assert_eq!(TemplateKind::Controller(cubit).file_name(&s), "todos_cubit.dart");
        assert_eq!(TemplateKind::State(cubit).directory(), "presentation/cubit");
        assert_eq!(TemplateKind::Event(CodeStyle::Default).directory(), "presentation/bloc");
    }

    #[test]
    fn state_management_set_sizes() {
        let cubit = StateManagement::Cubit(CodeStyle::Equatable);
        let bloc = StateManagement::Bloc(CodeStyle::Freezed);
        assert_eq!(TemplateKind::state_management_set(cubit).len(), 2);
        assert_eq!(
            TemplateKind::state_management_set(bloc),
            vec![
                TemplateKind::Event(CodeStyle::Freezed),
                TemplateKind::State(bloc),
                TemplateKind::Controller(bloc),
            ]
        );
    }

    #[test]
    fn layers_and_directories() {
        assert_eq!(TemplateKind::UseCase.directory(), "domain/usecases");
        assert_eq!(TemplateKind::ApiClient.directory(), "data/datasources");
        assert_eq!(
            TemplateKind::RepositoryImpl(DataSourceVariant::Both).directory(),
            "data/repositories"
        );
        assert_eq!(TemplateKind::NetResponse.layer(), Layer::Data);
    }
}
