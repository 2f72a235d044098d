//! Per-service client generation.
//!
//! Each service is generated by a fresh [`ServiceGen`] that reads the shared
//! [`DescriptorIndex`] and yields an immutable [`ServiceOutput`]. Nothing is
//! carried from one service to the next.

mod client;
mod lro;
mod method;

use prost_types::{MethodDescriptorProto, ServiceDescriptorProto};
use tracing::debug;

use crate::classify::MethodClassifier;
use crate::error::{CodegenError, Result};
use crate::imports::{resolve, ImportSet, ImportSpec};
use crate::index::{DescriptorId, DescriptorIndex};
use crate::naming::reduce_serv_name;
use crate::printer::Printer;

/// Generated body text and required imports for one service.
#[derive(Debug, Clone)]
pub struct ServiceOutput {
    /// Declared service name, e.g. `FooServiceV2`.
    pub service_name: String,
    pub body: String,
    pub imports: ImportSet,
    /// Long-running methods, in the order their result types were emitted.
    pub long_running: Vec<String>,
}

/// Imports every generated client needs regardless of its methods.
fn base_imports() -> [ImportSpec; 6] {
    [
        ImportSpec::bare("context"),
        ImportSpec::new("github.com/googleapis/gax-go/v2", "gax"),
        ImportSpec::bare("google.golang.org/api/option"),
        ImportSpec::bare("google.golang.org/api/transport"),
        ImportSpec::bare("google.golang.org/grpc"),
        ImportSpec::bare("google.golang.org/grpc/metadata"),
    ]
}

/// Imports needed once a service has a long-running method.
fn lro_imports() -> [ImportSpec; 3] {
    [
        ImportSpec::bare("time"),
        ImportSpec::bare("cloud.google.com/go/longrunning"),
        ImportSpec::new("cloud.google.com/go/longrunning/autogen", "lroauto"),
    ]
}

/// Generate the client for service `id`.
pub fn generate_service(
    index: &DescriptorIndex<'_>,
    classifier: &dyn MethodClassifier,
    id: DescriptorId,
) -> Result<ServiceOutput> {
    let DescriptorId::Service { file, index: si } = id else {
        return Err(CodegenError::MissingOwner(format!("{:?} is not a service", id)));
    };
    let service = index.service(file, si)?;

    let gen = ServiceGen {
        index,
        classifier,
        service,
        file,
        service_index: si,
        serv_name: reduce_serv_name(service.name()),
        service_pkg: resolve(index, id)?,
        printer: Printer::new(),
        imports: ImportSet::new(),
        lro_methods: Vec::new(),
    };
    gen.run()
}

/// Transient state for generating one service.
struct ServiceGen<'i, 'a> {
    index: &'i DescriptorIndex<'a>,
    classifier: &'i dyn MethodClassifier,
    service: &'a ServiceDescriptorProto,
    file: usize,
    service_index: usize,
    /// Reduced service name, the base of every generated identifier.
    serv_name: &'a str,
    /// Import of the package holding the service's transport client.
    service_pkg: ImportSpec,
    printer: Printer,
    imports: ImportSet,
    /// Long-running methods seen so far; their result types come last.
    lro_methods: Vec<&'a MethodDescriptorProto>,
}

impl<'i, 'a> ServiceGen<'i, 'a> {
    fn run(mut self) -> Result<ServiceOutput> {
        self.imports.extend(base_imports());
        self.imports.insert(self.service_pkg.clone());

        let has_lro = self
            .service
            .method
            .iter()
            .any(|m| self.classifier.is_long_running(m));
        if has_lro {
            self.imports.extend(lro_imports());
        }

        self.client_init(has_lro);

        let service = self.service;
        for (mi, m) in service.method.iter().enumerate() {
            self.method_doc(mi, m);

            if self.classifier.is_long_running(m) {
                self.lro_methods.push(m);
                self.lro_call(m)?;
            } else {
                self.unary_call(m)?;
            }
        }

        let mut lro_methods = std::mem::take(&mut self.lro_methods);
        lro_methods.sort_by(|a, b| a.name().cmp(b.name()));
        for m in &lro_methods {
            self.lro_type(m)?;
        }

        debug!(
            service = self.service.name(),
            methods = self.service.method.len(),
            long_running = lro_methods.len(),
            imports = self.imports.len(),
            "Service generated"
        );

        Ok(ServiceOutput {
            service_name: self.service.name().to_string(),
            body: self.printer.into_string(),
            imports: self.imports,
            long_running: lro_methods.iter().map(|m| m.name().to_string()).collect(),
        })
    }

    /// Go type expression (`alias.Name`) for a message, recording the
    /// import of its package.
    fn type_expr(&mut self, name: &str) -> Result<String> {
        let ty = self.index.lookup_type(name)?;
        let spec = resolve(self.index, ty.id)?;
        let expr = format!("{}.{}", spec.alias, ty.go_name);
        self.imports.insert(spec);
        Ok(expr)
    }

    fn service_id(&self) -> DescriptorId {
        DescriptorId::Service { file: self.file, index: self.service_index }
    }

    fn method_id(&self, mi: usize) -> DescriptorId {
        DescriptorId::Method { file: self.file, service: self.service_index, index: mi }
    }
}
