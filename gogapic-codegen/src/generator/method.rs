//! Call wrappers, one per RPC method.

use prost_types::MethodDescriptorProto;

use super::ServiceGen;
use crate::error::Result;
use crate::naming::lower_first;
use crate::printer::p;

impl<'i, 'a> ServiceGen<'i, 'a> {
    /// Doc comment read as a sentence starting with the method name.
    /// Methods without a comment get none.
    pub(super) fn method_doc(&mut self, mi: usize, m: &MethodDescriptorProto) {
        let Some(com) = self.index.comment(self.method_id(mi)) else {
            return;
        };
        let com = com.trim();
        if com.is_empty() {
            return;
        }
        // TODO: escape markdown in method comments.
        self.printer.comment(&format!("{} {}", m.name(), lower_first(com)));
    }

    pub(super) fn unary_call(&mut self, m: &MethodDescriptorProto) -> Result<()> {
        let in_type = self.type_expr(m.input_type())?;
        let out_type = self.type_expr(m.output_type())?;
        let serv_name = self.serv_name;

        p!(
            self.printer,
            "func (c *{}Client) {}(ctx context.Context, req *{}, opts ...gax.CallOption) (*{}, error) {{",
            serv_name,
            m.name(),
            in_type,
            out_type
        );
        self.invoke(m, &out_type);
        self.printer.line("return resp, nil");
        self.printer.line("}");
        self.printer.line("");

        Ok(())
    }

    /// Same call shape as a unary method; the returned handle is wrapped in
    /// the method's operation type.
    pub(super) fn lro_call(&mut self, m: &MethodDescriptorProto) -> Result<()> {
        let in_type = self.type_expr(m.input_type())?;
        let op_type = self.type_expr(m.output_type())?;
        let serv_name = self.serv_name;

        p!(
            self.printer,
            "func (c *{}Client) {}(ctx context.Context, req *{}, opts ...gax.CallOption) (*{}Operation, error) {{",
            serv_name,
            m.name(),
            in_type,
            m.name()
        );
        self.invoke(m, &op_type);
        p!(self.printer, "return &{}Operation{{", m.name());
        self.printer.line("lro: longrunning.InternalNewOperation(c.LROClient, resp),");
        self.printer.line("}, nil");
        self.printer.line("}");
        self.printer.line("");

        Ok(())
    }

    /// Metadata, per-call options, and one retryable invocation capturing
    /// the response into `resp`. Returns early on failure.
    fn invoke(&mut self, m: &MethodDescriptorProto, resp_type: &str) {
        let defaults = format!("c.CallOptions.{}", m.name());
        let transport = format!("{}Client", lower_first(self.serv_name));

        self.printer.line("ctx = insertMetadata(ctx, c.xGoogMetadata)");
        // Re-slice to the current length so the append never writes into
        // the client's default option list.
        p!(self.printer, "opts = append({0}[0:len({0}):len({0})], opts...)", defaults);
        p!(self.printer, "var resp *{}", resp_type);
        self.printer.line("err := gax.Invoke(ctx, func(ctx context.Context, settings gax.CallSettings) error {");
        self.printer.line("  var err error");
        p!(self.printer, "  resp, err = c.{}.{}(ctx, req, settings.GRPC...)", transport, m.name());
        self.printer.line("  return err");
        self.printer.line("}, opts...)");
        self.printer.line("if err != nil {");
        self.printer.line("  return nil, err");
        self.printer.line("}");
    }
}
