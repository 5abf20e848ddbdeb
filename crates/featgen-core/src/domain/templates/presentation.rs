//! State-management templates.
//!
//! Bloc gets event, state and bloc files in the default, equatable or freezed
//! style. Cubit gets state and cubit files in the default or equatable style.

use super::RenderContext;
use crate::domain::{
    naming::DerivedNames,
    value_objects::{CodeStyle, StateManagement},
};

// ── Events (bloc only) ────────────────────────────────────────────────────────

const EVENT_DEFAULT: &str = r#"part of '{{CONTROLLER_FILE}}.dart';

@immutable
abstract class {{NAME}}Event {}
"#;

const EVENT_EQUATABLE: &str = r#"part of '{{CONTROLLER_FILE}}.dart';

abstract class {{NAME}}Event extends Equatable {
  const {{NAME}}Event();

  @override
  List<Object> get props => [];
}
"#;

const EVENT_FREEZED: &str = r#"part of '{{CONTROLLER_FILE}}.dart';

@freezed
class {{NAME}}Event with _${{NAME}}Event {
  const factory {{NAME}}Event.started() = _Started;
}
"#;

// ── States ────────────────────────────────────────────────────────────────────

const STATE_DEFAULT: &str = r#"part of '{{CONTROLLER_FILE}}.dart';

@immutable
abstract class {{NAME}}State {}

class {{NAME}}Initial extends {{NAME}}State {}
"#;

const STATE_EQUATABLE: &str = r#"part of '{{CONTROLLER_FILE}}.dart';

abstract class {{NAME}}State extends Equatable {
  const {{NAME}}State();

  @override
  List<Object> get props => [];
}

class {{NAME}}Initial extends {{NAME}}State {}
"#;

const STATE_FREEZED: &str = r#"part of '{{CONTROLLER_FILE}}.dart';

@freezed
class {{NAME}}State with _${{NAME}}State {
  const factory {{NAME}}State.initial() = _Initial;
}
"#;

// ── Controllers ───────────────────────────────────────────────────────────────

const BLOC_DEFAULT: &str = r#"import 'package:bloc/bloc.dart';
import 'package:meta/meta.dart';

part '{{EVENT_FILE}}.dart';
part '{{STATE_FILE}}.dart';

class {{NAME}}Bloc extends Bloc<{{NAME}}Event, {{NAME}}State> {
  {{NAME}}Bloc() : super({{NAME}}Initial()) {
    on<{{NAME}}Event>((event, emit) {
      // TODO: implement event handler
    });
  }
}
"#;

const BLOC_EQUATABLE: &str = r#"import 'package:bloc/bloc.dart';
import 'package:equatable/equatable.dart';

part '{{EVENT_FILE}}.dart';
part '{{STATE_FILE}}.dart';

class {{NAME}}Bloc extends Bloc<{{NAME}}Event, {{NAME}}State> {
  {{NAME}}Bloc() : super({{NAME}}Initial()) {
    on<{{NAME}}Event>((event, emit) {
      // TODO: implement event handler
    });
  }
}
"#;

const BLOC_FREEZED: &str = r#"import 'package:bloc/bloc.dart';
import 'package:freezed_annotation/freezed_annotation.dart';

part '{{EVENT_FILE}}.dart';
part '{{STATE_FILE}}.dart';
part '{{CONTROLLER_FILE}}.freezed.dart';

class {{NAME}}Bloc extends Bloc<{{NAME}}Event, {{NAME}}State> {
  {{NAME}}Bloc() : super(const _Initial()) {
    on<{{NAME}}Event>((event, emit) {
      // TODO: implement event handler
    });
  }
}
"#;

const CUBIT_DEFAULT: &str = r#"import 'package:bloc/bloc.dart';
import 'package:meta/meta.dart';

part '{{STATE_FILE}}.dart';

class {{NAME}}Cubit extends Cubit<{{NAME}}State> {
  {{NAME}}Cubit() : super({{NAME}}Initial());
}
"#;

const CUBIT_EQUATABLE: &str = r#"import 'package:bloc/bloc.dart';
import 'package:equatable/equatable.dart';

part '{{STATE_FILE}}.dart';

class {{NAME}}Cubit extends Cubit<{{NAME}}State> {
  {{NAME}}Cubit() : super({{NAME}}Initial());
}
"#;

/// Bloc event file. Events are always written into the bloc set.
pub fn event(names: &DerivedNames, style: CodeStyle) -> String {
    let template = match style {
        CodeStyle::Default => EVENT_DEFAULT,
        CodeStyle::Equatable => EVENT_EQUATABLE,
        CodeStyle::Freezed => EVENT_FREEZED,
    };
    RenderContext::for_feature(names, StateManagement::Bloc(style)).render(template)
}

pub fn state(names: &DerivedNames, sm: StateManagement) -> String {
    let template = match sm {
        StateManagement::Bloc(CodeStyle::Freezed) => STATE_FREEZED,
        StateManagement::Bloc(CodeStyle::Equatable) | StateManagement::Cubit(CodeStyle::Equatable) => {
            STATE_EQUATABLE
        }
        _ => STATE_DEFAULT,
    };
    RenderContext::for_feature(names, sm).render(template)
}

pub fn controller(names: &DerivedNames, sm: StateManagement) -> String {
    let template = match sm {
        StateManagement::Bloc(CodeStyle::Default) => BLOC_DEFAULT,
        StateManagement::Bloc(CodeStyle::Equatable) => BLOC_EQUATABLE,
        StateManagement::Bloc(CodeStyle::Freezed) => BLOC_FREEZED,
        // Cubit never carries freezed; fall back to the plain cubit.
        StateManagement::Cubit(CodeStyle::Equatable) => CUBIT_EQUATABLE,
        StateManagement::Cubit(_) => CUBIT_DEFAULT,
    };
    RenderContext::for_feature(names, sm).render(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> DerivedNames {
        DerivedNames::derive("counter")
    }

    #[test]
    fn freezed_wins_for_every_bloc_file() {
        let sm = StateManagement::from_flags(false, true, true);
        assert!(event(&counter(), sm.style()).contains("@freezed"));
        assert!(state(&counter(), sm).contains("@freezed"));
        let bloc = controller(&counter(), sm);
        assert!(bloc.contains("freezed_annotation"));
        assert!(!bloc.contains("equatable"));
        assert!(bloc.contains("part 'counter_bloc.freezed.dart';"));
    }

    #[test]
    fn equatable_bloc_set() {
        let sm = StateManagement::Bloc(CodeStyle::Equatable);
        assert!(event(&counter(), CodeStyle::Equatable).contains("extends Equatable"));
        assert!(state(&counter(), sm).contains("class CounterState extends Equatable"));
        assert!(controller(&counter(), sm).contains("import 'package:equatable/equatable.dart';"));
    }

    #[test]
    fn default_bloc_constructor_is_well_formed() {
        let out = controller(&counter(), StateManagement::Bloc(CodeStyle::Default));
        assert!(out.contains("CounterBloc() : super(CounterInitial()) {"));
        assert_eq!(out.matches('{').count(), out.matches('}').count());
    }

    #[test]
    fn cubit_files_reference_each_other() {
        let sm = StateManagement::Cubit(CodeStyle::Default);
        let st = state(&counter(), sm);
        let cubit = controller(&counter(), sm);
        assert!(st.starts_with("part of 'counter_cubit.dart';"));
        assert!(cubit.contains("part 'counter_state.dart';"));
        assert!(cubit.contains("class CounterCubit extends Cubit<CounterState>"));
        assert!(!cubit.contains("freezed"));
    }

    #[test]
    fn cubit_ignores_freezed_switch() {
        let sm = StateManagement::from_flags(true, false, true);
        assert!(!state(&counter(), sm).contains("@freezed"));
        assert!(!controller(&counter(), sm).contains("freezed"));
    }

    #[test]
    fn event_parts_into_bloc() {
        assert!(event(&DerivedNames::derive("user profile"), CodeStyle::Default)
            .starts_with("part of 'user_profile_bloc.dart';"));
    }
}
