use super::CatalogEntry;

const SEED: &str = r#"[
  {
    "id": 1,
    "name": "Notion AI",
    "category": "productivity",
    "description": "Workspace inteligente com IA integrada para produtividade máxima. Combine anotações, tarefas, wikis e bancos de dados em um só lugar.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.8,
    "reviews": 1250,
    "price": "free",
    "tags": ["IA", "Produtividade", "Colaboração", "Anotações"],
    "url": "https://notion.so",
    "featured": true,
    "createdAt": "2024-01-15"
  },
  {
    "id": 2,
    "name": "Todoist Premium",
    "category": "productivity",
    "description": "Gerenciador de tarefas avançado com recursos de IA para organização pessoal e profissional.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.6,
    "reviews": 890,
    "price": "premium",
    "tags": ["Tarefas", "Organização", "Produtividade"],
    "url": "https://todoist.com",
    "createdAt": "2024-01-10"
  },
  {
    "id": 3,
    "name": "Trello Power-Up",
    "category": "productivity",
    "description": "Quadros Kanban visuais para gerenciamento de projetos com automações inteligentes.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.4,
    "reviews": 2100,
    "price": "free",
    "tags": ["Kanban", "Projetos", "Colaboração"],
    "url": "https://trello.com",
    "createdAt": "2024-01-08"
  },
  {
    "id": 4,
    "name": "Asana Teams",
    "category": "productivity",
    "description": "Plataforma completa de gerenciamento de trabalho para equipes de todos os tamanhos.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.5,
    "reviews": 1560,
    "price": "premium",
    "tags": ["Equipes", "Projetos", "Automação"],
    "url": "https://asana.com",
    "createdAt": "2024-01-15"
  },
  {
    "id": 5,
    "name": "Figma",
    "category": "design",
    "description": "Design colaborativo de interfaces em tempo real direto no navegador.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.9,
    "reviews": 2100,
    "price": "free",
    "tags": ["UI", "Prototipagem", "Colaboração"],
    "url": "https://figma.com",
    "featured": true,
    "createdAt": "2024-01-20"
  },
  {
    "id": 6,
    "name": "Canva Pro",
    "category": "design",
    "description": "Criação de materiais visuais com modelos prontos e recursos de IA.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.7,
    "reviews": 3400,
    "price": "premium",
    "tags": ["Gráficos", "Modelos", "IA"],
    "url": "https://canva.com",
    "createdAt": "2024-01-05"
  },
  {
    "id": 7,
    "name": "HubSpot CRM",
    "category": "marketing",
    "description": "CRM gratuito com automação de marketing, vendas e atendimento.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.5,
    "reviews": 1780,
    "price": "free",
    "tags": ["CRM", "Automação", "Vendas"],
    "url": "https://hubspot.com",
    "createdAt": "2024-01-12"
  },
  {
    "id": 8,
    "name": "GitHub Copilot",
    "category": "development",
    "description": "Assistente de programação com IA que sugere código em tempo real.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.7,
    "reviews": 2900,
    "price": "premium",
    "tags": ["IA", "Código", "Produtividade"],
    "url": "https://github.com/features/copilot",
    "featured": true,
    "createdAt": "2024-01-25"
  },
  {
    "id": 9,
    "name": "QuickBooks",
    "category": "finance",
    "description": "Contabilidade e gestão financeira para pequenas empresas.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.3,
    "reviews": 960,
    "price": "premium",
    "tags": ["Contabilidade", "Faturas", "Relatórios"],
    "url": "https://quickbooks.intuit.com",
    "createdAt": "2024-01-03"
  },
  {
    "id": 10,
    "name": "Slack",
    "category": "communication",
    "description": "Mensagens em canais para equipes com integrações e automações.",
    "logo": "/placeholder.svg?height=60&width=60",
    "rating": 4.6,
    "reviews": 4100,
    "price": "free",
    "tags": ["Chat", "Equipes", "Integrações"],
    "url": "https://slack.com",
    "createdAt": "2024-01-18"
  }
]"#;

/// Built-in sample listings used when no catalog has been cached yet.
pub fn seed_entries() -> Vec<CatalogEntry> {
    serde_json::from_str(SEED).unwrap_or_else(|err| {
        log::error!("built-in seed catalog is malformed: {}", err);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses() {
        let entries = seed_entries();
        assert_eq!(entries.len(), 10);
        assert!(entries.iter().all(|entry| entry.is_active));
        assert_eq!(entries.iter().filter(|entry| entry.featured).count(), 3);
    }
}
