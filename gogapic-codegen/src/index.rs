//! Lookup tables over every file in a generation request.
//!
//! The index is built once per run and is read-only afterwards. Descriptors
//! are addressed by [`DescriptorId`], a synthetic key assigned while
//! indexing, rather than by reference identity.

use std::collections::HashMap;

use prost_types::{DescriptorProto, FileDescriptorProto, ServiceDescriptorProto};
use tracing::debug;

use crate::error::{CodegenError, Result};

/// Field number of `service` in `FileDescriptorProto`.
const FILE_SERVICE_FIELD: i32 = 6;
/// Field number of `method` in `ServiceDescriptorProto`.
const SERVICE_METHOD_FIELD: i32 = 2;

/// Stable key for a message, service, or method in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorId {
    /// Slot in the index's message arena.
    Message(usize),
    /// `index`-th service of file `file`.
    Service { file: usize, index: usize },
    /// `index`-th method of the `service`-th service of file `file`.
    Method { file: usize, service: usize, index: usize },
}

/// A resolved message reference.
#[derive(Debug, Clone)]
pub struct TypeRef<'a> {
    pub id: DescriptorId,
    pub message: &'a DescriptorProto,
    /// Go identifier of the generated struct: nested names joined by `_`.
    pub go_name: String,
}

impl<'a> TypeRef<'a> {
    /// Short (unqualified) name of the message.
    pub fn name(&self) -> &'a str {
        self.message.name()
    }
}

#[derive(Debug)]
struct MessageEntry<'a> {
    message: &'a DescriptorProto,
    go_name: String,
}

/// Owner, type, and comment tables for one request.
#[derive(Debug)]
pub struct DescriptorIndex<'a> {
    files: &'a [FileDescriptorProto],
    /// Message arena, addressed by `DescriptorId::Message`.
    messages: Vec<MessageEntry<'a>>,
    /// Fully-qualified name (`.pkg.Name`) to message.
    types: HashMap<String, DescriptorId>,
    /// Message or service to owning file.
    owners: HashMap<DescriptorId, usize>,
    /// Service or method to its leading comment.
    comments: HashMap<DescriptorId, String>,
}

impl<'a> DescriptorIndex<'a> {
    /// Index every file of the request.
    pub fn build(files: &'a [FileDescriptorProto]) -> Result<Self> {
        let mut index = Self {
            files,
            messages: Vec::new(),
            types: HashMap::new(),
            owners: HashMap::new(),
            comments: HashMap::new(),
        };

        for (fi, file) in files.iter().enumerate() {
            // In descriptors, a leading dot means the name is fully-qualified.
            let prefix = match file.package() {
                "" => String::new(),
                pkg => format!(".{}", pkg),
            };
            for message in &file.message_type {
                index.add_message(fi, &prefix, "", message);
            }

            for si in 0..file.service.len() {
                index.owners.insert(DescriptorId::Service { file: fi, index: si }, fi);
            }

            index.index_comments(fi, file)?;
        }

        debug!(
            files = files.len(),
            types = index.types.len(),
            comments = index.comments.len(),
            "Descriptor index built"
        );

        Ok(index)
    }

    /// Register a message and, recursively, the messages nested inside it.
    fn add_message(&mut self, file: usize, prefix: &str, go_prefix: &str, message: &'a DescriptorProto) {
        let id = DescriptorId::Message(self.messages.len());
        let full_name = format!("{}.{}", prefix, message.name());
        let go_name = if go_prefix.is_empty() {
            message.name().to_string()
        } else {
            format!("{}_{}", go_prefix, message.name())
        };

        self.messages.push(MessageEntry { message, go_name: go_name.clone() });
        self.owners.insert(id, file);

        for nested in &message.nested_type {
            self.add_message(file, &full_name, &go_name, nested);
        }
        self.types.insert(full_name, id);
    }

    /// Collect leading comments for services and methods.
    ///
    /// A location path alternates field number and element index, so
    /// `[6, i]` is the i-th service and `[6, i, 2, j]` is its j-th method.
    /// Every other shape is ignored.
    fn index_comments(&mut self, fi: usize, file: &FileDescriptorProto) -> Result<()> {
        let Some(info) = &file.source_code_info else {
            return Ok(());
        };

        for loc in &info.location {
            let Some(text) = &loc.leading_comments else {
                continue;
            };
            let id = match loc.path.as_slice() {
                &[FILE_SERVICE_FIELD, s] => {
                    let s = checked_index(file, &loc.path, s, file.service.len())?;
                    DescriptorId::Service { file: fi, index: s }
                }
                &[FILE_SERVICE_FIELD, s, SERVICE_METHOD_FIELD, m] => {
                    let s = checked_index(file, &loc.path, s, file.service.len())?;
                    let m = checked_index(file, &loc.path, m, file.service[s].method.len())?;
                    DescriptorId::Method { file: fi, service: s, index: m }
                }
                _ => continue,
            };
            self.comments.insert(id, text.clone());
        }

        Ok(())
    }

    /// All files of the request, in request order.
    pub fn files(&self) -> &'a [FileDescriptorProto] {
        self.files
    }

    /// Look up a message by fully-qualified name.
    pub fn lookup_type(&self, name: &str) -> Result<TypeRef<'a>> {
        let id = *self
            .types
            .get(name)
            .ok_or_else(|| CodegenError::UnknownType(name.to_string()))?;
        let DescriptorId::Message(slot) = id else {
            return Err(CodegenError::UnknownType(name.to_string()));
        };
        let entry = &self.messages[slot];
        Ok(TypeRef { id, message: entry.message, go_name: entry.go_name.clone() })
    }

    /// The file that declares the given message or service.
    pub fn owner(&self, id: DescriptorId) -> Result<&'a FileDescriptorProto> {
        self.owners
            .get(&id)
            .map(|&fi| &self.files[fi])
            .ok_or_else(|| CodegenError::MissingOwner(format!("{:?}", id)))
    }

    /// Leading comment attached to a service or method, if any.
    pub fn comment(&self, id: DescriptorId) -> Option<&str> {
        self.comments.get(&id).map(String::as_str)
    }

    /// Service descriptor by position.
    pub fn service(&self, file: usize, index: usize) -> Result<&'a ServiceDescriptorProto> {
        self.files
            .get(file)
            .and_then(|f| f.service.get(index))
            .ok_or_else(|| CodegenError::MissingOwner(format!("{:?}", DescriptorId::Service { file, index })))
    }

    /// Ids of the services declared in file `file`, in declaration order.
    pub fn services(&self, file: usize) -> impl Iterator<Item = DescriptorId> + '_ {
        (0..self.files[file].service.len()).map(move |index| DescriptorId::Service { file, index })
    }
}

fn checked_index(file: &FileDescriptorProto, path: &[i32], i: i32, len: usize) -> Result<usize> {
    usize::try_from(i)
        .ok()
        .filter(|&i| i < len)
        .ok_or_else(|| CodegenError::LocationOutOfRange {
            file: file.name().to_string(),
            path: path.to_vec(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost_types::source_code_info::Location;
    use prost_types::{MethodDescriptorProto, SourceCodeInfo};

    fn location(path: Vec<i32>, comment: &str) -> Location {
        Location {
            path,
            leading_comments: Some(comment.to_string()),
            ..Default::default()
        }
    }

    fn sample_file() -> FileDescriptorProto {
        FileDescriptorProto {
            name: Some("foo.proto".to_string()),
            package: Some("example.foo".to_string()),
            message_type: vec![DescriptorProto {
                name: Some("Outer".to_string()),
                nested_type: vec![DescriptorProto {
                    name: Some("Inner".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            service: vec![ServiceDescriptorProto {
                name: Some("FooService".to_string()),
                method: vec![
                    MethodDescriptorProto {
                        name: Some("GetFoo".to_string()),
                        ..Default::default()
                    },
                    MethodDescriptorProto {
                        name: Some("ListFoos".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            }],
            source_code_info: Some(SourceCodeInfo {
                location: vec![
                    location(vec![6, 0], " The foo service.\n"),
                    location(vec![6, 0, 2, 1], " Lists foos.\n"),
                    // Message comment, not indexed.
                    location(vec![4, 0], " Outer message.\n"),
                ],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_type_table_includes_nested_messages() {
        let files = vec![sample_file()];
        let index = DescriptorIndex::build(&files).unwrap();

        assert_eq!(index.lookup_type(".example.foo.Outer").unwrap().name(), "Outer");
        let inner = index.lookup_type(".example.foo.Outer.Inner").unwrap();
        assert_eq!(inner.name(), "Inner");
        assert_eq!(inner.go_name, "Outer_Inner");
        assert!(matches!(
            index.lookup_type(".example.foo.Missing"),
            Err(CodegenError::UnknownType(_))
        ));
    }

    #[test]
    fn test_owner_table() {
        let files = vec![sample_file()];
        let index = DescriptorIndex::build(&files).unwrap();

        let inner = index.lookup_type(".example.foo.Outer.Inner").unwrap();
        assert_eq!(index.owner(inner.id).unwrap().name(), "foo.proto");
        let service = DescriptorId::Service { file: 0, index: 0 };
        assert_eq!(index.owner(service).unwrap().name(), "foo.proto");
        assert!(index.owner(DescriptorId::Service { file: 0, index: 7 }).is_err());
    }

    #[test]
    fn test_service_by_position() {
        let files = vec![sample_file()];
        let index = DescriptorIndex::build(&files).unwrap();

        assert_eq!(index.service(0, 0).unwrap().name(), "FooService");
        assert!(matches!(index.service(0, 1), Err(CodegenError::MissingOwner(_))));
        assert!(matches!(index.service(2, 0), Err(CodegenError::MissingOwner(_))));
    }

    #[test]
    fn test_comment_paths() {
        let files = vec![sample_file()];
        let index = DescriptorIndex::build(&files).unwrap();

        assert_eq!(
            index.comment(DescriptorId::Service { file: 0, index: 0 }),
            Some(" The foo service.\n")
        );
        assert_eq!(
            index.comment(DescriptorId::Method { file: 0, service: 0, index: 1 }),
            Some(" Lists foos.\n")
        );
        assert_eq!(index.comment(DescriptorId::Method { file: 0, service: 0, index: 0 }), None);
    }

    #[test]
    fn test_comment_path_out_of_range() {
        let mut file = sample_file();
        file.source_code_info = Some(SourceCodeInfo {
            location: vec![location(vec![6, 0, 2, 5], " nope\n")],
        });
        let files = vec![file];

        assert!(matches!(
            DescriptorIndex::build(&files),
            Err(CodegenError::LocationOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_package() {
        let mut file = sample_file();
        file.package = None;
        let files = vec![file];
        let index = DescriptorIndex::build(&files).unwrap();

        assert!(index.lookup_type(".Outer").is_ok());
    }
}
