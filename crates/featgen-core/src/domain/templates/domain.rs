//! Domain layer templates: entity contract, repository contract, use case.
//!
//! These fork on `is_list` only; style switches never reach this layer.

use super::RenderContext;
use crate::domain::naming::DerivedNames;

const ENTITY_CONTRACT: &str = r#"abstract class {{ENTITY}}Type {
//  String get id;
}
"#;

const REPOSITORY_CONTRACT: &str = r#"import 'package:shared_lib/base.dart' show AsyncResponse;
import '../entities/{{ENTITY_FILE}}.dart';

abstract class {{ENTITY}}RepoType {
  Future<AsyncResponse<{{ENTITY_TYPE}}>> {{METHOD}}();
}
"#;

const USE_CASE: &str = r#"import 'package:shared_lib/base.dart' show AsyncResponse, UseCase, NoParams;

import '../entities/{{ENTITY_FILE}}.dart';
import '../repositories/{{REPO_TYPE_FILE}}.dart';

class {{USECASE}} extends UseCase<{{ENTITY_TYPE}}, NoParams> {
  {{USECASE}}(this.{{ENTITY_CAMEL}}RepoType);
  final {{ENTITY}}RepoType {{ENTITY_CAMEL}}RepoType;

  @override
  Future<AsyncResponse<{{ENTITY_TYPE}}>> call(NoParams params) async {
    final res = await {{ENTITY_CAMEL}}RepoType.{{METHOD}}();
    return res;
  }
}
"#;

pub fn entity_contract(names: &DerivedNames) -> String {
    RenderContext::for_entity(names, false).render(ENTITY_CONTRACT)
}

pub fn repository_contract(names: &DerivedNames, is_list: bool) -> String {
    RenderContext::for_entity(names, is_list).render(REPOSITORY_CONTRACT)
}

pub fn use_case(names: &DerivedNames, is_list: bool) -> String {
    RenderContext::for_entity(names, is_list).render(USE_CASE)
}
