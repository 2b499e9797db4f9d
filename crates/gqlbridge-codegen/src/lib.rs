//! gqlbridge-codegen - Java source generation from a GraphQL schema model.
//!
//! This crate turns a [`Schema`](gqlbridge_core::Schema) into one Java source
//! unit per declared type. It performs no I/O; writing the units is left to
//! the caller.
//!
//! # Architecture
//!
//! ```text
//! Schema + Config
//!     ↓
//!  [Generator]  ── per type, dispatched by kind
//!     ↓
//!  ├─→ [ClassGenerator]      OBJECT, INPUT_OBJECT → public class
//!  ├─→ [InterfaceGenerator]  INTERFACE            → public interface
//!  ├─→ [EnumGenerator]       ENUM                 → public enum
//!  └─→ [UnionGenerator]      UNION                → marker interface
//!           ↓ uses
//!     [TypeMapper] [NamingHelper] [Lombok/Validation/Custom annotations]
//!           ↓
//!     GeneratedUnit { file_name, content }
//! ```
//!
//! Each type is generated independently. A failure in one type is collected
//! into [`GenerationResult::errors`] and the remaining types still generate.
//!
//! # Type Mappings
//!
//! | GraphQL | Java (nullable) | Java (non-null) |
//! |---------|-----------------|-----------------|
//! | `String`, `ID` | `String` | `String` |
//! | `Int` | `Integer` | `int` |
//! | `Float` | `Double` | `double` |
//! | `Boolean` | `Boolean` | `boolean` |
//! | `DateTime` | `LocalDateTime` | `LocalDateTime` |
//! | `[T]` | `List<Boxed<T>>` | `List<Boxed<T>>` |
//!
//! Nullable references become `Optional<T>` under
//! [`NullableHandling::Optional`](gqlbridge_core::NullableHandling).
//!
//! # Usage
//!
//! ```rust
//! use gqlbridge_codegen::Generator;
//! use gqlbridge_core::{Config, Schema};
//!
//! let schema = Schema::from_json_str(r#"{
//!   "types": [
//!     { "name": "Post", "kind": "OBJECT",
//!       "fields": [ { "name": "id", "type": { "name": "ID", "nonNull": true } } ] }
//!   ]
//! }"#).unwrap();
//!
//! let result = Generator::new(Config::default()).generate(&schema);
//!
//! assert_eq!(result.units[0].file_name, "Post.java");
//! assert!(result.units[0].content.contains("private String id;"));
//! ```

pub mod annotations;
pub mod generator;
pub mod naming;
pub mod typemap;

pub use generator::{
    GeneratedUnit, GenerationContext, GenerationResult, GenerationStats, GenerationWarning,
    Generator, TypeGenerator,
};
pub use naming::NamingHelper;
pub use typemap::{MappingResult, TypeMapper};
