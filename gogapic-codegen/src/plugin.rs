//! protoc plugin protocol: request in, generated files out.

use prost::Message;
use prost_types::compiler::code_generator_response::File;
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use tracing::{debug, info};

use crate::assembler::{commit, GeneratedFile, GeneratorOptions};
use crate::classify::MethodClassifier;
use crate::error::Result;
use crate::generator::generate_service;
use crate::index::DescriptorIndex;
use crate::naming::client_file_name;

/// Generate a client for every service of every file named in
/// `file_to_generate`. Files come out in request order, header before body.
pub fn generate(
    request: &CodeGeneratorRequest,
    classifier: &dyn MethodClassifier,
    opts: &GeneratorOptions,
) -> Result<Vec<GeneratedFile>> {
    let index = DescriptorIndex::build(&request.proto_file)?;
    let out_dir = request.parameter();
    let mut files = Vec::new();

    for (fi, file) in index.files().iter().enumerate() {
        if !request.file_to_generate.iter().any(|f| f == file.name()) {
            continue;
        }
        debug!(file = file.name(), services = file.service.len(), "Generating file");

        for id in index.services(fi) {
            let output = generate_service(&index, classifier, id)?;
            let file_name = client_file_name(out_dir, &output.service_name);
            files.extend(commit(output, &file_name, opts));
        }
    }

    info!(
        requested = request.file_to_generate.len(),
        generated = files.len(),
        "Generation complete"
    );

    Ok(files)
}

/// Wrap generated files in a plugin response. Continuation units carry no
/// name so protoc appends them to the preceding file.
pub fn to_response(files: Vec<GeneratedFile>) -> CodeGeneratorResponse {
    CodeGeneratorResponse {
        file: files
            .into_iter()
            .map(|f| File {
                name: (!f.continuation).then_some(f.name),
                content: Some(f.content),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

/// Decode a serialized request, generate, and encode the response.
pub fn process(
    input: &[u8],
    classifier: &dyn MethodClassifier,
    opts: &GeneratorOptions,
) -> Result<Vec<u8>> {
    let request = CodeGeneratorRequest::decode(input)?;
    debug!(
        proto_files = request.proto_file.len(),
        parameter = request.parameter(),
        "Request decoded"
    );

    let response = to_response(generate(&request, classifier, opts)?);
    let mut buf = Vec::with_capacity(response.encoded_len());
    response.encode(&mut buf)?;
    Ok(buf)
}
