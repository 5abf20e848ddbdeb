//! Data layer templates.
//!
//! Four datasource files, two model files and the repository
//! implementation. The net-response wrapper gains a nested list container
//! when `is_list`; the repository implementation also branches on the
//! data-source variant.

use super::RenderContext;
use crate::domain::{naming::DerivedNames, value_objects::DataSourceVariant};

const API_CLIENT: &str = r#"import 'package:retrofit/retrofit.dart';
import 'package:shared_lib/dio.dart';

import '../models/{{NET_RESPONSE_FILE}}.dart';

part '{{API_FILE}}.g.dart';

@RestApi(baseUrl: "")
abstract class {{ENTITY}}Api {
  factory {{ENTITY}}Api(Dio dio, {String baseUrl}) = _{{ENTITY}}Api;

  @GET("/api/init/")
  Future<{{NET_RESPONSE}}> {{METHOD}}(@Query('client_id') String clientId);
}
"#;

const DATASOURCE_CONTRACT: &str = r#"import 'package:shared_lib/base.dart' show AsyncResponse;

import '../models/{{MODEL_FILE}}.dart';

abstract class {{ENTITY}}DatasourceType {
  Future<AsyncResponse<{{MODEL_TYPE}}>> {{METHOD}}();
}
"#;

const LOCAL_DATASOURCE: &str = r#"import 'package:shared_lib/base.dart' show AsyncResponse;
import '{{DATASOURCE_TYPE_FILE}}.dart';
import '../models/{{MODEL_FILE}}.dart';

class {{ENTITY}}LocalDatasource extends {{ENTITY}}DatasourceType {
  static final {{MODEL_TYPE}} {{DEFAULT_VAR}} = {{DEFAULT_VALUE}};

  @override
  Future<AsyncResponse<{{MODEL_TYPE}}>> {{METHOD}}() async {
    return AsyncResponse(data: {{DEFAULT_VAR}});
  }
}
"#;

const REMOTE_DATASOURCE: &str = r#"import 'package:shared_lib/base.dart'
    show AsyncResponse, NetConfig, handleNetResponse;
import '../models/{{NET_RESPONSE_FILE}}.dart';
import '../models/{{MODEL_FILE}}.dart';

import '{{API_FILE}}.dart';
import '{{DATASOURCE_TYPE_FILE}}.dart';

class {{ENTITY}}RemoteDatasource extends {{ENTITY}}DatasourceType {
  final {{ENTITY}}Api api;
  {{ENTITY}}RemoteDatasource(this.api);

  @override
  Future<AsyncResponse<{{MODEL_TYPE}}>> {{METHOD}}() async {
    return handleNetResponse<{{MODEL_TYPE}}, {{NET_RESPONSE}}>(
        api.{{METHOD}}(NetConfig.appKey));
  }
}
"#;

const DATA_MODEL: &str = r#"import 'package:freezed_annotation/freezed_annotation.dart';
import 'package:flutter/foundation.dart';

import '../../domain/entities/{{ENTITY_FILE}}.dart';

part '{{MODEL_FILE}}.freezed.dart';
part '{{MODEL_FILE}}.g.dart';

@freezed
class {{ENTITY}}Model with _${{ENTITY}}Model implements {{ENTITY}}Type {
  const {{ENTITY}}Model._();
  const factory {{ENTITY}}Model() = _{{ENTITY}}Model;

  factory {{ENTITY}}Model.fromJson(Map<String, Object?> json) =>
      _${{ENTITY}}ModelFromJson(json);
}
"#;

const NET_RESPONSE: &str = r#"import 'package:freezed_annotation/freezed_annotation.dart';
import 'package:flutter/foundation.dart';
import 'package:base/base.dart' show NetResponse;

import '{{MODEL_FILE}}.dart';

part '{{NET_RESPONSE_FILE}}.freezed.dart';
part '{{NET_RESPONSE_FILE}}.g.dart';

@freezed
class {{NET_RESPONSE}}
    with _${{NET_RESPONSE}}
    implements NetResponse<{{RESPONSE_TYPE}}> {
  const factory {{NET_RESPONSE}}({
    required int code,
    @JsonKey(name: "description") String? message,
    @JsonKey(name: "data") {{RESPONSE_TYPE}}? data,
  }) = _{{NET_RESPONSE}};

  factory {{NET_RESPONSE}}.fromJson(Map<String, Object?> json) =>
      _${{NET_RESPONSE}}FromJson(json);
}
"#;

const LIST_CONTAINER: &str = r#"
@Freezed(makeCollectionsUnmodifiable: false)
class {{ENTITY}}sData with _${{ENTITY}}sData {
  const factory {{ENTITY}}sData({
    @JsonKey(name: "{{ENTITY_SNAKE}}_list") List<{{ENTITY}}Model>? {{ENTITY_SNAKE}}s,
  }) = _{{ENTITY}}sData;

  factory {{ENTITY}}sData.fromJson(Map<String, Object?> json) =>
      _${{ENTITY}}sDataFromJson(json);
}
"#;

const REPOSITORY_IMPORTS: &str = r#"import 'package:shared_lib/base.dart' show AsyncResponse;

import '../../domain/entities/{{ENTITY_FILE}}.dart';
import '../../domain/repositories/{{REPO_TYPE_FILE}}.dart';
"#;

const REPOSITORY_BOTH: &str = r#"import '../datasources/{{LOCAL_DATASOURCE_FILE}}.dart';
import '../datasources/{{REMOTE_DATASOURCE_FILE}}.dart';

class {{ENTITY}}Repo implements {{ENTITY}}RepoType {
  final {{ENTITY}}LocalDatasource localDatasource;
  final {{ENTITY}}RemoteDatasource remoteDatasource;

  {{ENTITY}}Repo(this.remoteDatasource, this.localDatasource);

  @override
  Future<AsyncResponse<{{ENTITY_TYPE}}>> {{METHOD}}() async {
    final res = await remoteDatasource.{{METHOD}}();
    if (res.success) {
      return res;
    }
    return await localDatasource.{{METHOD}}();
  }
}
"#;

const REPOSITORY_LOCAL: &str = r#"import '../datasources/{{LOCAL_DATASOURCE_FILE}}.dart';

class {{ENTITY}}Repo implements {{ENTITY}}RepoType {
  final {{ENTITY}}LocalDatasource localDatasource;

  {{ENTITY}}Repo(this.localDatasource);

  @override
  Future<AsyncResponse<{{ENTITY_TYPE}}>> {{METHOD}}() async {
    return await localDatasource.{{METHOD}}();
  }
}
"#;

const REPOSITORY_REMOTE: &str = r#"import '../datasources/{{REMOTE_DATASOURCE_FILE}}.dart';

class {{ENTITY}}Repo implements {{ENTITY}}RepoType {
  final {{ENTITY}}RemoteDatasource remoteDatasource;

  {{ENTITY}}Repo(this.remoteDatasource);

  @override
  Future<AsyncResponse<{{ENTITY_TYPE}}>> {{METHOD}}() async {
    return await remoteDatasource.{{METHOD}}();
  }
}
"#;

pub fn api_client(names: &DerivedNames, is_list: bool) -> String {
    RenderContext::for_entity(names, is_list).render(API_CLIENT)
}

pub fn datasource_contract(names: &DerivedNames, is_list: bool) -> String {
    RenderContext::for_entity(names, is_list).render(DATASOURCE_CONTRACT)
}

pub fn local_datasource(names: &DerivedNames, is_list: bool) -> String {
    let title = names.title_case();
    let (var, value) = if is_list {
        (format!("default{title}s"), format!("[const {title}Model()]"))
    } else {
        (format!("default{title}"), format!("const {title}Model()"))
    };
    RenderContext::for_entity(names, is_list)
        .with_variable("DEFAULT_VAR", var)
        .with_variable("DEFAULT_VALUE", value)
        .render(LOCAL_DATASOURCE)
}

pub fn remote_datasource(names: &DerivedNames, is_list: bool) -> String {
    RenderContext::for_entity(names, is_list).render(REMOTE_DATASOURCE)
}

pub fn data_model(names: &DerivedNames) -> String {
    RenderContext::for_entity(names, false).render(DATA_MODEL)
}

pub fn net_response(names: &DerivedNames, is_list: bool) -> String {
    let title = names.title_case();
    let response_type = if is_list {
        format!("{title}sData")
    } else {
        format!("{title}Model")
    };
    let ctx = RenderContext::for_entity(names, is_list).with_variable("RESPONSE_TYPE", response_type);

    let mut out = ctx.render(NET_RESPONSE);
    if is_list {
        out.push_str(&ctx.render(LIST_CONTAINER));
    }
    out
}

pub fn repository_impl(names: &DerivedNames, is_list: bool, variant: DataSourceVariant) -> String {
    let body = match variant {
        DataSourceVariant::Both => REPOSITORY_BOTH,
        DataSourceVariant::LocalOnly => REPOSITORY_LOCAL,
        DataSourceVariant::RemoteOnly => REPOSITORY_REMOTE,
    };
    let ctx = RenderContext::for_entity(names, is_list);
    format!("{}{}", ctx.render(REPOSITORY_IMPORTS), ctx.render(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> DerivedNames {
        DerivedNames::derive("todo")
    }

    #[test]
    fn api_client_targets_net_response() {
        let single = api_client(&todo(), false);
        assert!(single.contains("import '../models/todo_net_response.dart';"));
        assert!(single.contains("Future<TodoNetResponse> getTodo(@Query('client_id') String clientId);"));

        let list = api_client(&todo(), true);
        assert!(list.contains("import '../models/todos_net_response.dart';"));
        assert!(list.contains("Future<TodosNetResponse> getTodoList("));
        assert!(list.contains("part 'todo_api.g.dart';"));
    }

    #[test]
    fn local_datasource_defaults() {
        let single = local_datasource(&todo(), false);
        assert!(single.contains("static final TodoModel defaultTodo = const TodoModel();"));

        let list = local_datasource(&todo(), true);
        assert!(list.contains("static final List<TodoModel> defaultTodos = [const TodoModel()];"));
        assert!(list.contains("return AsyncResponse(data: defaultTodos);"));
    }

    #[test]
    fn remote_datasource_handles_net_response() {
        let out = remote_datasource(&todo(), true);
        assert!(out.contains("handleNetResponse<List<TodoModel>, TodosNetResponse>("));
        assert!(out.contains("api.getTodoList(NetConfig.appKey)"));
        assert!(out.contains("class TodoRemoteDatasource extends TodoDatasourceType"));
    }

    #[test]
    fn data_model_implements_entity() {
        let out = data_model(&DerivedNames::derive("order item"));
        assert!(out.contains("class OrderItemModel with _$OrderItemModel implements OrderItemType"));
        assert!(out.contains("part 'order_item_model.freezed.dart';"));
    }

    #[test]
    fn net_response_list_container_only_for_lists() {
        let single = net_response(&todo(), false);
        assert!(single.contains("implements NetResponse<TodoModel>"));
        assert!(!single.contains("TodosData"));

        let list = net_response(&todo(), true);
        assert!(list.contains("class TodosNetResponse"));
        assert!(list.contains("implements NetResponse<TodosData>"));
        assert!(list.contains("class TodosData with _$TodosData"));
        assert!(list.contains(r#"@JsonKey(name: "todo_list") List<TodoModel>? todos,"#));
        assert!(list.contains("part 'todos_net_response.g.dart';"));
    }

    #[test]
    fn list_container_field_is_snake_plural() {
        let list = net_response(&DerivedNames::derive("order item"), true);
        assert!(list.contains(
            r#"@JsonKey(name: "order_item_list") List<OrderItemModel>? order_items,"#
        ));
        assert!(!list.contains("orderItems"));
    }

    #[test]
    fn repository_fallback_only_for_both() {
        let both = repository_impl(&todo(), false, DataSourceVariant::Both);
        assert!(both.contains("if (res.success)"));
        assert!(both.contains("localDatasource.getTodo()"));
        assert!(both.contains("remoteDatasource.getTodo()"));

        let local = repository_impl(&todo(), false, DataSourceVariant::LocalOnly);
        assert!(!local.contains("if (res.success)"));
        assert!(!local.contains("Remote"));
        assert!(local.contains("TodoRepo(this.localDatasource);"));

        let remote = repository_impl(&todo(), true, DataSourceVariant::RemoteOnly);
        assert!(!remote.contains("if (res.success)"));
        assert!(!remote.contains("Local"));
        assert!(remote.contains("Future<AsyncResponse<List<TodoType>>> getTodoList()"));
    }
}
