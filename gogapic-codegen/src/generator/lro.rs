//! Companion result types for long-running methods.

use prost_types::MethodDescriptorProto;

use super::ServiceGen;
use crate::error::Result;
use crate::printer::p;

impl<'i, 'a> ServiceGen<'i, 'a> {
    /// `<Method>Operation`: a handle that can be resumed by name, polled,
    /// and waited on.
    pub(super) fn lro_type(&mut self, m: &MethodDescriptorProto) -> Result<()> {
        let op_type = self.type_expr(m.output_type())?;
        let serv_name = self.serv_name;
        let name = m.name();

        p!(self.printer, "// {}Operation manages a long-running operation from {}.", name, name);
        p!(self.printer, "type {}Operation struct {{", name);
        self.printer.line("lro *longrunning.Operation");
        self.printer.line("}");
        self.printer.line("");

        p!(self.printer, "// {}Operation returns a new {}Operation from a given name.", name, name);
        p!(
            self.printer,
            "// The name must be that of a previously created {}Operation, possibly from a different process.",
            name
        );
        p!(self.printer, "func (c *{}Client) {}Operation(name string) *{}Operation {{", serv_name, name, name);
        p!(self.printer, "return &{}Operation{{", name);
        p!(self.printer, "lro: longrunning.InternalNewOperation(c.LROClient, &{}{{Name: name}}),", op_type);
        self.printer.line("}");
        self.printer.line("}");
        self.printer.line("");

        self.printer.line("// Wait blocks until the long-running operation is completed, returning any error encountered.");
        p!(self.printer, "func (op *{}Operation) Wait(ctx context.Context, opts ...gax.CallOption) error {{", name);
        self.printer.line("return op.lro.WaitWithInterval(ctx, nil, time.Minute, opts...)");
        self.printer.line("}");
        self.printer.line("");

        self.printer.line("// Poll fetches the latest state of the long-running operation.");
        self.printer.line("//");
        self.printer.line("// If Poll fails, the error is returned and op is unmodified.");
        p!(self.printer, "func (op *{}Operation) Poll(ctx context.Context, opts ...gax.CallOption) error {{", name);
        self.printer.line("return op.lro.Poll(ctx, nil, opts...)");
        self.printer.line("}");
        self.printer.line("");

        self.printer.line("// Done reports whether the long-running operation has completed.");
        p!(self.printer, "func (op *{}Operation) Done() bool {{", name);
        self.printer.line("return op.lro.Done()");
        self.printer.line("}");
        self.printer.line("");

        self.printer.line("// Name returns the name of the long-running operation.");
        self.printer.line("// The name is assigned by the server and is unique within the service from which the operation is created.");
        p!(self.printer, "func (op *{}Operation) Name() string {{", name);
        self.printer.line("return op.lro.Name()");
        self.printer.line("}");
        self.printer.line("");

        Ok(())
    }
}
