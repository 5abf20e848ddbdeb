use std::collections::HashMap;

use super::files;
use crate::domain::{naming::DerivedNames, value_objects::StateManagement};

/// Variables available to a template, rendered with `{{VARIABLE}}`
/// placeholders.
///
/// ## Entity variables (domain and data layers)
///
/// | Variable          | Single            | List                     |
/// |-------------------|-------------------|--------------------------|
/// | `ENTITY`          | `Todo`            | `Todo`                   |
/// | `ENTITY_SNAKE`    | `todo`            | `todo`                   |
/// | `ENTITY_CAMEL`    | `todo`            | `todo`                   |
/// | `METHOD`          | `getTodo`         | `getTodoList`            |
/// | `ENTITY_TYPE`     | `TodoType`        | `List<TodoType>`         |
/// | `MODEL_TYPE`      | `TodoModel`       | `List<TodoModel>`        |
/// | `NET_RESPONSE`    | `TodoNetResponse` | `TodosNetResponse`       |
/// | `USECASE`         | `LoadTodoUsecase` | `LoadTodoListUsecase`    |
///
/// Plus one `*_FILE` variable per referenced file stem.
///
/// ## Feature variables (presentation layer)
///
/// `NAME`, `NAME_SNAKE`, `EVENT_FILE`, `STATE_FILE`, `CONTROLLER_FILE`.
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn for_entity(names: &DerivedNames, is_list: bool) -> Self {
        let title = names.title_case();
        let (method, entity_type, model_type, net_response, usecase) = if is_list {
            (
                format!("get{title}List"),
                format!("List<{title}Type>"),
                format!("List<{title}Model>"),
                format!("{title}sNetResponse"),
                format!("Load{title}ListUsecase"),
            )
        } else {
            (
                format!("get{title}"),
                format!("{title}Type"),
                format!("{title}Model"),
                format!("{title}NetResponse"),
                format!("Load{title}Usecase"),
            )
        };

        Self::empty()
            .with_variable("ENTITY", title)
            .with_variable("ENTITY_SNAKE", names.snake_case())
            .with_variable("ENTITY_CAMEL", names.lower_camel())
            .with_variable("METHOD", method)
            .with_variable("ENTITY_TYPE", entity_type)
            .with_variable("MODEL_TYPE", model_type)
            .with_variable("NET_RESPONSE", net_response)
            .with_variable("USECASE", usecase)
            .with_variable("ENTITY_FILE", files::entity(names))
            .with_variable("REPO_TYPE_FILE", files::repository_contract(names))
            .with_variable("API_FILE", files::api(names))
            .with_variable("DATASOURCE_TYPE_FILE", files::datasource_contract(names))
            .with_variable("LOCAL_DATASOURCE_FILE", files::local_datasource(names))
            .with_variable("REMOTE_DATASOURCE_FILE", files::remote_datasource(names))
            .with_variable("MODEL_FILE", files::model(names))
            .with_variable("NET_RESPONSE_FILE", files::net_response(names, is_list))
    }

    pub fn for_feature(names: &DerivedNames, sm: StateManagement) -> Self {
        Self::empty()
            .with_variable("NAME", names.title_case())
            .with_variable("NAME_SNAKE", names.snake_case())
            .with_variable("EVENT_FILE", files::event(names))
            .with_variable("STATE_FILE", files::state(names))
            .with_variable("CONTROLLER_FILE", files::controller(names, sm))
    }

    fn empty() -> Self {
        Self {
            variables: HashMap::new(),
        }
    }

    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` placeholder. Unknown placeholders are left as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}
