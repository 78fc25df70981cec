//! Operational form catalog
//!
//! Every dashboard form expressed as a [`FormSchema`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OpsError;
use crate::field::{options, FieldDescriptor, Glyph, InputKind, SelectOption};
use crate::schema::{FieldSpec, FormSchema, RepeatGroup, Section};
use crate::validation::Rule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    Login,
    CreateProject,
    EditUser,
    Meta,
    Sales,
    Installation,
    Metering,
    Subsidy,
    ServiceEngineer,
    Support,
    Godown,
}

impl FormKind {
    pub fn all() -> &'static [FormKind] {
        &[
            FormKind::Login,
            FormKind::CreateProject,
            FormKind::EditUser,
            FormKind::Meta,
            FormKind::Sales,
            FormKind::Installation,
            FormKind::Metering,
            FormKind::Subsidy,
            FormKind::ServiceEngineer,
            FormKind::Support,
            FormKind::Godown,
        ]
    }

    /// Tabs of the project detail screen, in display order
    pub fn project_tabs() -> &'static [FormKind] {
        &[
            FormKind::Sales,
            FormKind::Installation,
            FormKind::ServiceEngineer,
            FormKind::Godown,
            FormKind::Metering,
            FormKind::Subsidy,
            FormKind::Support,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            FormKind::Login => "login",
            FormKind::CreateProject => "create-project",
            FormKind::EditUser => "edit-user",
            FormKind::Meta => "meta",
            FormKind::Sales => "sales",
            FormKind::Installation => "installation",
            FormKind::Metering => "metering",
            FormKind::Subsidy => "subsidy",
            FormKind::ServiceEngineer => "service-engineer",
            FormKind::Support => "support",
            FormKind::Godown => "godown",
        }
    }

    /// Tab caption
    pub fn tab_label(&self) -> &'static str {
        match self {
            FormKind::Login => "Login",
            FormKind::CreateProject => "New Project",
            FormKind::EditUser => "Edit User",
            FormKind::Meta => "Meta",
            FormKind::Sales => "Sales",
            FormKind::Installation => "Installation",
            FormKind::Metering => "Metering",
            FormKind::Subsidy => "Subsidy",
            FormKind::ServiceEngineer => "Service-Engineer",
            FormKind::Support => "Support",
            FormKind::Godown => "Godown",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self, OpsError> {
        FormKind::all()
            .iter()
            .copied()
            .find(|k| k.slug() == slug)
            .ok_or_else(|| OpsError::UnknownForm(slug.to_string()))
    }

    pub fn schema(&self) -> FormSchema {
        match self {
            FormKind::Login => login(),
            FormKind::CreateProject => create_project(),
            FormKind::EditUser => edit_user(),
            FormKind::Meta => meta(),
            FormKind::Sales => sales(),
            FormKind::Installation => installation(),
            FormKind::Metering => metering(),
            FormKind::Subsidy => subsidy(),
            FormKind::ServiceEngineer => service_engineer(),
            FormKind::Support => support(),
            FormKind::Godown => godown(),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FormKind {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::from_slug(s)
    }
}

fn text(name: &str, label: &str) -> FieldSpec {
    FieldSpec::new(name, FieldDescriptor::text(label))
}

fn number(name: &str, label: &str) -> FieldSpec {
    FieldSpec::new(name, FieldDescriptor::number(label))
}

fn date(name: &str, label: &str) -> FieldSpec {
    FieldSpec::new(name, FieldDescriptor::date(label))
}

fn select(name: &str, label: &str, opts: Vec<SelectOption>) -> FieldSpec {
    FieldSpec::new(name, FieldDescriptor::select(label, opts))
}

fn login() -> FormSchema {
    FormSchema::new("Login").submit_label("LOGIN").section(Section::fields(
        "Credentials",
        vec![
            FieldSpec::new(
                "email",
                FieldDescriptor::kind("Email", InputKind::Email).with_icon(Glyph::Mail),
            )
            .rule(Rule::required("Email is required"))
            .rule(Rule::email("Please enter a valid email")),
            FieldSpec::new(
                "password",
                FieldDescriptor::kind("Password", InputKind::Password).with_icon(Glyph::Lock),
            )
            .rule(Rule::required("Password is required"))
            .rule(Rule::min_length(6, "Password must be at least 6 characters")),
        ],
    ))
}

fn create_project() -> FormSchema {
    FormSchema::new("Create New Project")
        .submit_label("Create Project")
        .section(Section::fields(
            "Project",
            vec![
                FieldSpec::new(
                    "projectName",
                    FieldDescriptor::text("Project Name").with_icon(Glyph::Building),
                ),
                FieldSpec::new(
                    "address",
                    FieldDescriptor::text("Address").with_icon(Glyph::MapPin),
                ),
            ],
        ))
}

fn edit_user() -> FormSchema {
    FormSchema::new("Edit User")
        .submit_label("Update User")
        .section(Section::fields(
            "User",
            vec![
                FieldSpec::new(
                    "userName",
                    FieldDescriptor::text("User Name").with_icon(Glyph::Building),
                )
                .rule(Rule::required("User name is required")),
                FieldSpec::new(
                    "address",
                    FieldDescriptor::text("Address").with_icon(Glyph::MapPin),
                )
                .rule(Rule::required("Address is required")),
                FieldSpec::new(
                    "email",
                    FieldDescriptor::kind("Email", InputKind::Email).with_icon(Glyph::Mail),
                )
                .rule(Rule::required("Email is required"))
                .rule(Rule::email("Please enter a valid email")),
                FieldSpec::new(
                    "role",
                    FieldDescriptor::select(
                        "Role",
                        options(&[
                            ("Admin", "Admin"),
                            ("Sales Person", "Sales Person"),
                            ("Installer", "Installer"),
                            ("Service Engineer", "Service Engineer"),
                        ]),
                    )
                    .with_icon(Glyph::User),
                )
                .rule(Rule::required("Role is required")),
            ],
        ))
}

fn meta() -> FormSchema {
    FormSchema::new("Meta Information")
        .section(Section::fields(
            "Meta Details",
            vec![
                select("type", "Type", options(&[("meta", "Meta"), ("other", "Other")]))
                    .default_value("meta")
                    .rule(Rule::required("Type is required")),
                text("value", "Value").rule(Rule::required("Value is required")),
            ],
        ))
        .section(Section::fields(
            "Description and Status",
            vec![
                text("description", "Description").rule(Rule::required("Description is required")),
                text("status", "Status").rule(Rule::required("Status is required")),
            ],
        ))
}

fn sales() -> FormSchema {
    FormSchema::new("Project Details")
        .reset_on_submit()
        .section(Section::fields(
            "Customer Personal Details",
            vec![
                text("customerName", "Customer Name"),
                text("address", "Address"),
                FieldSpec::new(
                    "phoneNumber",
                    FieldDescriptor::kind("Phone Number", InputKind::Tel),
                ),
            ],
        ))
        .section(Section::fields(
            "Billing and Connection Details",
            vec![
                text("billConnectionNumber", "Bill Connection Number"),
                text("billAccountNumber", "Bill Account Number"),
                number("sanctionedLoad", "Sanctioned Load")
                    .rule(Rule::positive("Sanctioned Load must be a positive number")),
                number("appliedKW", "Applied KW")
                    .rule(Rule::positive("Applied KW must be a positive number")),
            ],
        ))
        .section(Section::fields(
            "Structure Details",
            vec![
                text("structureType", "Type/Size of Structure"),
                select("needVisit", "Need Visit", options(&[("Yes", "Yes"), ("No", "No")]))
                    .default_value("No"),
            ],
        ))
        .section(Section::fields(
            "Project Management",
            vec![
                date("date", "Date"),
                text("managerName", "Manager Name"),
                number("projectCost", "Project Cost"),
                text("paymentMode", "Payment Mode"),
                text("financingType", "Financing Type"),
                date("managerSignatureDate", "Manager Signature Date"),
                number("bookingAmount", "Booking Amount"),
                date("bookingDate", "Booking Date"),
            ],
        ))
        .section(Section::group(
            "Payment Details",
            RepeatGroup::new("paymentDetails", "Payment")
                .serial("sno")
                .field(date("date", "Date"))
                .field(
                    select(
                        "paymentType",
                        "Payment Type",
                        options(&[
                            ("cash", "Cash"),
                            ("cheque", "Cheque"),
                            ("online", "Online"),
                        ]),
                    )
                    .default_value("cash"),
                )
                .field(
                    text("chequeNo", "Cheque Number").shown_when("paymentType", "cheque"),
                )
                .field(
                    number("amount", "Amount")
                        .rule(Rule::positive("Amount must be a positive number")),
                )
                .field(text("depositBankDetail", "Deposit Bank Detail"))
                .field(text("remark", "Remark")),
        ))
        .section(Section::fields(
            "Agreement Details",
            vec![
                date("agreementPPAMakeDate", "Agreement & PPA Make Date"),
                date("agreementPPASignatureDate", "Agreement & PPA Signature Date"),
            ],
        ))
}

fn installation() -> FormSchema {
    FormSchema::new("Installation Details")
        .reset_on_submit()
        .section(Section::fields(
            "Panel Information",
            vec![
                text("panelType", "Panel Type"),
                date("expectedInstallationDate", "Expected Installation Date"),
            ],
        ))
        .section(Section::fields(
            "Material Status",
            vec![
                date("structureDeliveryDate", "Structure Delivery Date"),
                text("pendingMaterialState", "Pending Material State"),
            ],
        ))
        .section(Section::fields(
            "Wire Details",
            vec![
                number("wireDetails.acWire", "AC Wire (in mtr)"),
                number("wireDetails.dcWire", "DC Wire (in mtr)"),
                number("wireDetails.earthingWire", "Earthing Wire (in mtr)"),
            ],
        ))
        .section(Section::fields(
            "Logistics",
            vec![
                number("transportationRounds", "Transportation Rounds"),
                text("extraMaterial", "Extra Material"),
            ],
        ))
        .section(Section::fields(
            "Delivery and Installation Dates",
            vec![
                date("panelDeliveryDate", "Panel Delivery Date"),
                date("installationDate", "Installation Date"),
                date("inverterDeliveryDate", "Inverter Delivery Date"),
                date("inverterInstallationDate", "Inverter Installation Date"),
            ],
        ))
        .section(Section::fields(
            "Verification",
            vec![
                text("installationTeamName", "Installation Team Name"),
                text("verifiedBy", "Verified By"),
            ],
        ))
}

fn metering() -> FormSchema {
    FormSchema::new("Metering Details")
        .section(Section::fields(
            "Meter Details",
            vec![
                text("meterNumber", "Meter Number"),
                date("meterIssueDate", "Meter Issue Date"),
                date("meterReceiptingDate", "Meter Receipting Date"),
                date("meterSubmitDate", "Meter Submit Date"),
                date("meterInstallationDate", "Meter Installation Date"),
                date("sealingReceivingDate", "Sealing Receiving Date"),
            ],
        ))
        .section(Section::fields(
            "JIR Details",
            vec![
                date("jirSubmissionDate", "JIR Submission Date"),
                text("jirReceivedPerson", "JIR Received Person"),
                date("jirReceivedPersonDate", "JIR Received Person Date"),
                date("jirReceivedOfficeDate", "JIR Received at Office Date (After SDO Signature)"),
            ],
        ))
        .section(Section::fields(
            "Status",
            vec![select(
                "status",
                "Status",
                options(&[
                    ("application_submitted", "Application Submitted"),
                    ("feasibility_check", "Feasibility Check"),
                    ("approval_in_principle", "Approval in Principle"),
                    ("installation_started", "Installation Started"),
                    ("inspection_testing", "Inspection & Testing"),
                    ("net_meter_installed", "Net Meter Installed"),
                    ("final_activation", "Final Activation"),
                    ("billing_monitoring", "Billing & Monitoring"),
                    ("completed", "Completed"),
                    ("rejected", "Rejected"),
                    ("cancelled", "Cancelled"),
                ]),
            )],
        ))
}

fn subsidy_stages() -> Vec<SelectOption> {
    options(&[
        ("application_submitted", "Application Submitted"),
        ("under_review", "Under Review"),
        ("approval_in_principle", "Approval in Principle"),
        ("installation_started", "Installation Started"),
        ("inspection_net_metering", "Inspection & Net Metering"),
        ("subsidy_disbursed", "Subsidy Disbursed"),
        ("monitoring_closure", "Monitoring & Closure"),
        ("rejected", "Rejected"),
        ("cancelled", "Cancelled"),
    ])
}

fn subsidy() -> FormSchema {
    FormSchema::new("Subsidy Details")
        .section(Section::fields(
            "Center Subsidy Information",
            vec![
                date("centerSubsidyAppliedDate", "Center Subsidy Applied Date"),
                date("centerSubsidyReceiveDate", "Center Subsidy Receive Date"),
                select("centerStatus", "Status", subsidy_stages()),
            ],
        ))
        .section(Section::fields(
            "State Subsidy Information",
            vec![
                date("stateSubsidyAppliedDate", "State Subsidy Applied Date"),
                date("stateSubsidyReceiveDate", "State Subsidy Receive Date"),
                select("stateStatus", "Status", subsidy_stages()),
            ],
        ))
        .section(Section::fields(
            "Final Submission",
            vec![
                date("finalSubmissionDate", "Date of Final Submission"),
                text("finalStatusForSite", "Final Status for Site"),
            ],
        ))
}

fn service_engineer() -> FormSchema {
    FormSchema::new("Service Engineer Report")
        .section(Section::fields(
            "Site Visit",
            vec![
                date("siteVisitDate", "Site Visit Date"),
                text("installationFeedback", "Installation Feedback"),
            ],
        ))
        .section(Section::group(
            "Panel Serial Numbers",
            RepeatGroup::new("panelSerialNumbers", "Panel").field(
                text("serialNumber", "Serial Number")
                    .rule(Rule::required("Serial number is required")),
            ),
        ))
        .section(Section::fields(
            "Inverter and Geotag",
            vec![
                text("inverterSerialNumber", "Inverter Serial Number"),
                date("geotagPhotoDate", "Geotag Photo Date"),
            ],
        ))
}

fn support() -> FormSchema {
    FormSchema::new("Support Ticket")
        .section(Section::fields(
            "Ticket Details",
            vec![
                text("title", "Title").rule(Rule::required("Title is required")),
                FieldSpec::new(
                    "description",
                    FieldDescriptor::text("Description")
                        .with_placeholder("Describe the issue in detail..."),
                )
                .rule(Rule::required("Description is required")),
            ],
        ))
        .section(Section::fields(
            "Ticket Assignment",
            vec![
                select(
                    "assignedTo",
                    "Assigned To",
                    options(&[
                        ("john_doe", "John Doe"),
                        ("jane_smith", "Jane Smith"),
                        ("alex_johnson", "Alex Johnson"),
                    ]),
                )
                .rule(Rule::required("Assigned to field is required")),
                select(
                    "priority",
                    "Priority",
                    options(&[
                        ("low", "Low"),
                        ("medium", "Medium"),
                        ("high", "High"),
                        ("critical", "Critical"),
                    ]),
                )
                .default_value("medium")
                .rule(Rule::required("Priority is required")),
            ],
        ))
}

fn godown() -> FormSchema {
    FormSchema::new("Godown Material Details")
        .reset_on_submit()
        .section(Section::group(
            "Materials",
            RepeatGroup::new("materials", "Material")
                .field(text("materialName", "Material Name"))
                .field(text("materialType", "Material Type"))
                .field(number("quantity", "Quantity"))
                .field(text("unit", "Unit"))
                .field(text("remarks", "Remarks")),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_schema_is_well_formed() {
        for kind in FormKind::all() {
            assert!(kind.schema().check().is_ok(), "{kind} schema failed check");
        }
    }

    #[test]
    fn slugs_round_trip() {
        for kind in FormKind::all() {
            assert_eq!(FormKind::from_slug(kind.slug()), Ok(*kind));
        }
        assert_eq!(
            "nope".parse::<FormKind>(),
            Err(OpsError::UnknownForm("nope".to_string()))
        );
    }

    #[test]
    fn metering_status_has_eleven_stages() {
        let schema = FormKind::Metering.schema();
        let status = schema.field("status").unwrap();
        assert_eq!(status.variant().options().len(), 11);
        assert_eq!(status.descriptor.choices()[0].title, "Select Status");
    }

    #[test]
    fn report_titles_and_labels() {
        assert_eq!(FormKind::ServiceEngineer.schema().title, "Service Engineer Report");
        assert_eq!(FormKind::Godown.schema().title, "Godown Material Details");
        let metering = FormKind::Metering.schema();
        assert_eq!(
            metering.field("jirReceivedOfficeDate").unwrap().label(),
            "JIR Received at Office Date (After SDO Signature)"
        );
    }

    #[test]
    fn forms_that_reset_after_submit() {
        let resetting: Vec<FormKind> = FormKind::all()
            .iter()
            .copied()
            .filter(|kind| kind.schema().reset_on_submit)
            .collect();
        assert_eq!(
            resetting,
            vec![FormKind::Sales, FormKind::Installation, FormKind::Godown]
        );
    }

    #[test]
    fn project_tabs_start_with_sales() {
        assert_eq!(FormKind::project_tabs()[0], FormKind::Sales);
        assert!(!FormKind::project_tabs().contains(&FormKind::Login));
    }
}
