//! Operator-facing transcript
//!
//! Plain text for a human at the Replit console. There is no stable schema
//! and nothing should parse it.

use std::io::{self, Write};

use crate::config::SetupEnvironment;

pub fn print_banner(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "🚀 Setting up Masjid AI for Replit...")?;
    writeln!(out)
}

/// Import steps, webhook URL and the feature summary.
pub fn print_instructions(out: &mut dyn Write, environment: &SetupEnvironment) -> io::Result<()> {
    writeln!(out, "\n📋 SETUP INSTRUCTIONS:")?;
    writeln!(out, "\n1️⃣ Run this Replit project")?;
    writeln!(out, "2️⃣ Open the n8n interface (it will open automatically)")?;
    writeln!(out, "3️⃣ Import the workflow:")?;
    writeln!(out, "   • Click \"+\" → Import from JSON")?;
    writeln!(out, "   • Copy content from n8n_masjid_workflow_replit.json")?;
    writeln!(out, "   • Paste and click Import")?;
    writeln!(out, "\n4️⃣ Configure WhatsApp API:")?;
    writeln!(out, "   • Go to \"WhatsApp Sender\" node")?;
    writeln!(out, "   • Update Authorization header with your API key")?;
    writeln!(out, "\n5️⃣ Activate workflow and get webhook URL")?;
    writeln!(out, "\n🎯 Your webhook URL will be:")?;
    writeln!(out, "   {}", environment.webhook_url())?;

    writeln!(out, "\n📱 WHATSAPP PROVIDERS SUPPORTED:")?;
    for provider in ["Fonnte API", "Woowa API", "WhatsApp Business API", "Generic APIs"] {
        writeln!(out, "   • {provider}")?;
    }

    writeln!(out, "\n🤖 AI & DATABASE:")?;
    writeln!(out, "   ✅ OpenRouter API key: Included")?;
    writeln!(out, "   ✅ Supabase integration: Ready")?;
    writeln!(out, "   ✅ Multi-provider WhatsApp: Ready")?;

    writeln!(out, "\n🎊 Ready to serve your masjid community!")?;
    writeln!(out, "\n📚 Services Available:")?;
    writeln!(out, "   🕌 14 Islamic services (Health services removed)")?;
    writeln!(out, "   🤖 AI Chat with Islamic knowledge")?;
    writeln!(out, "   📊 Analytics logging to Supabase")?;
    writeln!(out, "   🌐 Multi-provider WhatsApp support")
}

pub fn print_completion(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "\n🔧 Setup completed! Run \"npm start\" to begin.")
}
